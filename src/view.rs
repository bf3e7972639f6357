//! Page elements the components write to and read from.
//!
//! Each trait covers one kind of element. Bindings hold `Rc<dyn ...>` handles
//! resolved once when a page is mounted; a missing element is a `None` and
//! the step that would have touched it is skipped. The in-memory elements at
//! the bottom back the command line front end and the tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Element whose text content can be replaced.
pub trait TextTarget {
    fn set_text(&self, text: &str);

    /// Drop the "nothing here yet" styling once real content arrives.
    fn clear_empty_state(&self) {}
}

/// Form field whose current value can be read.
pub trait InputSource {
    fn value(&self) -> String;
}

/// Logo image: hidden until a source is assigned.
pub trait ImageTarget {
    fn show(&self, src: &str);
}

/// Panel that can be shown or hidden.
pub trait Toggle {
    fn set_hidden(&self, hidden: bool);
}

/// Drop-down of teams.
pub trait SelectControl {
    fn value(&self) -> String;
    /// Text of the currently chosen entry, empty when nothing is chosen.
    fn selected_label(&self) -> String;
    fn set_value(&self, value: &str);
}

pub type Text = Rc<dyn TextTarget>;
pub type Input = Rc<dyn InputSource>;

/// Records every text written to it; the last one is what a reader sees.
#[derive(Debug, Default)]
pub struct TextSlot {
    history: RefCell<Vec<String>>,
    filled: Cell<bool>,
}

impl TextSlot {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn text(&self) -> Option<String> {
        self.history.borrow().last().cloned()
    }

    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }

    pub fn is_filled(&self) -> bool {
        self.filled.get()
    }
}

impl TextTarget for TextSlot {
    fn set_text(&self, text: &str) {
        self.history.borrow_mut().push(text.to_string());
    }

    fn clear_empty_state(&self) {
        self.filled.set(true);
    }
}

/// Input field holding a value typed in ahead of time.
#[derive(Debug, Default)]
pub struct FieldValue(RefCell<String>);

impl FieldValue {
    pub fn new(value: impl Into<String>) -> Rc<Self> {
        Rc::new(Self(RefCell::new(value.into())))
    }

    pub fn replace(&self, value: impl Into<String>) {
        *self.0.borrow_mut() = value.into();
    }
}

impl InputSource for FieldValue {
    fn value(&self) -> String {
        self.0.borrow().clone()
    }
}

#[derive(Debug, Default)]
pub struct ImageSlot {
    src: RefCell<Option<String>>,
}

impl ImageSlot {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Source of the image, `None` while it is still hidden.
    pub fn src(&self) -> Option<String> {
        self.src.borrow().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.src.borrow().is_some()
    }
}

impl ImageTarget for ImageSlot {
    fn show(&self, src: &str) {
        *self.src.borrow_mut() = Some(src.to_string());
    }
}

#[derive(Debug)]
pub struct PanelSlot {
    hidden: Cell<bool>,
}

impl PanelSlot {
    /// Panels start hidden, like the details block in the markup.
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            hidden: Cell::new(true),
        })
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden.get()
    }
}

impl Toggle for PanelSlot {
    fn set_hidden(&self, hidden: bool) {
        self.hidden.set(hidden);
    }
}

/// Select control over a fixed list of `(value, label)` options.
///
/// Setting a value that matches no option clears the selection, which is
/// what a browser does too.
#[derive(Debug)]
pub struct OptionList {
    options: Vec<(String, String)>,
    selected: Cell<Option<usize>>,
}

impl OptionList {
    pub fn new<I, V, L>(options: I) -> Rc<Self>
    where
        I: IntoIterator<Item = (V, L)>,
        V: Into<String>,
        L: Into<String>,
    {
        Rc::new(Self {
            options: options
                .into_iter()
                .map(|(v, l)| (v.into(), l.into()))
                .collect(),
            selected: Cell::new(None),
        })
    }

    /// The team drop-down as the profile page renders it, placeholder first.
    pub fn teams() -> Rc<Self> {
        let list = Self::new(
            std::iter::once(("", "Choose a team"))
                .chain(crate::types::TEAMS.iter().map(|t| (t.key, t.name))),
        );
        list.selected.set(Some(0));
        list
    }
}

impl SelectControl for OptionList {
    fn value(&self) -> String {
        self.selected
            .get()
            .and_then(|i| self.options.get(i))
            .map(|(v, _)| v.clone())
            .unwrap_or_default()
    }

    fn selected_label(&self) -> String {
        self.selected
            .get()
            .and_then(|i| self.options.get(i))
            .map(|(_, l)| l.clone())
            .unwrap_or_default()
    }

    fn set_value(&self, value: &str) {
        self.selected
            .set(self.options.iter().position(|(v, _)| v == value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_list_selection() {
        let select = OptionList::teams();
        assert_eq!(select.value(), "");
        assert_eq!(select.selected_label(), "Choose a team");

        select.set_value("mclaren");
        assert_eq!(select.value(), "mclaren");
        assert_eq!(select.selected_label(), "McLaren");

        select.set_value("williams");
        assert_eq!(select.value(), "");
        assert_eq!(select.selected_label(), "");
    }

    #[test]
    fn test_text_slot_keeps_history() {
        let slot = TextSlot::new();
        assert_eq!(slot.text(), None);
        slot.set_text("Summarizing…");
        slot.set_text("done");
        assert_eq!(slot.text().as_deref(), Some("done"));
        assert_eq!(slot.history().len(), 2);
        assert!(!slot.is_filled());
    }
}
