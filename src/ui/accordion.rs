//! FAQ accordion bound to the page

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::core::Accordion;
use crate::core::accordion::ACTIVE_CLASS;
use crate::ui::dom;

/// Make FAQ items open one at a time when their question is clicked
pub fn install(document: &Document, item_selector: &str, question_selector: &str) -> usize {
    let items: Rc<Vec<Element>> = Rc::new(dom::query_all(document, item_selector));
    let initial = Accordion::from_markup(
        items
            .iter()
            .map(|item| item.class_list().contains(ACTIVE_CLASS)),
    );
    sync(&items, initial);
    let accordion = Rc::new(Cell::new(initial));

    for (index, item) in items.iter().enumerate() {
        let Ok(Some(question)) = item.query_selector(question_selector) else {
            continue;
        };
        let items = items.clone();
        let accordion = accordion.clone();
        dom::listen(&question, "click", move |_| {
            let mut state = accordion.get();
            state.toggle(index);
            accordion.set(state);
            sync(&items, state);
        });
    }

    items.len()
}

fn sync(items: &[Element], state: Accordion) {
    for (i, item) in items.iter().enumerate() {
        dom::set_class(item, ACTIVE_CLASS, state.is_open(i));
    }
}
