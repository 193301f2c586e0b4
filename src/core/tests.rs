#[cfg(test)]
mod tests {
    use crate::core::{Accordion, CounterRamp, ViewportRegistry, counter};

    // Stats containers are observed once; each eligible number counts up once.
    fn stats_frames(registry: &mut ViewportRegistry<&'static str>, texts: &[&str]) -> Vec<Vec<u64>> {
        let mut runs = Vec::new();
        for _ in registry.take_visible([("hero-stats", true)]) {
            for text in texts {
                if let Some(ramp) = counter::stat_target(text)
                    .and_then(|target| CounterRamp::new(target, counter::DEFAULT_DURATION))
                {
                    runs.push(ramp.collect());
                }
            }
        }
        runs
    }

    #[test]
    fn test_stats_block_animates_only_plain_numbers() {
        let mut registry = ViewportRegistry::new();
        registry.register("hero-stats");

        let runs = stats_frames(&mut registry, &["42", "2-3", "+20%", "3 часа"]);

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].last(), Some(&42));
    }

    #[test]
    fn test_stats_block_animates_once() {
        let mut registry = ViewportRegistry::new();
        registry.register("hero-stats");

        assert_eq!(stats_frames(&mut registry, &["42"]).len(), 1);
        assert!(stats_frames(&mut registry, &["42"]).is_empty());
    }

    #[test]
    fn test_stats_block_reported_twice_in_one_batch() {
        let mut registry = ViewportRegistry::new();
        registry.register("hero-stats");

        let visible = registry.take_visible([("hero-stats", true), ("hero-stats", true)]);

        assert_eq!(visible, vec!["hero-stats"]);
        assert!(registry.is_empty());
    }

    // Markup ships the second FAQ item open; markup classes are `[-, active, active]`.
    #[test]
    fn test_preopened_faq_item_closes_on_first_click() {
        let mut accordion = Accordion::from_markup([false, true, true]);
        let classes = |accordion: &Accordion| -> Vec<bool> {
            (0..3).map(|i| accordion.is_open(i)).collect()
        };
        assert_eq!(classes(&accordion), vec![false, true, false]);

        accordion.toggle(1);
        assert_eq!(classes(&accordion), vec![false, false, false]);

        accordion.toggle(2);
        assert_eq!(classes(&accordion), vec![false, false, true]);
    }
}
