//! Search and settings form state.
//!
//! The forms hold raw field values exactly as a user would submit them. Nothing
//! is validated here: the search form turns into [`FilterCriteria`] on
//! submission, and the settings value is handed to the theme controller as a
//! string.

use super::filter::{FilterCriteria, ANY};
use super::modes::SearchField;
use crate::domain::Catalog;
use crate::ui::theme::ThemeName;
use std::collections::BTreeMap;

/// One `value`/`label` pair of a select field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// A select field: a fixed option list and the index of the chosen option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectField {
    options: Vec<SelectOption>,
    index: usize,
}

impl SelectField {
    /// Builds a wildcard option labelled `any_label` followed by every table
    /// entry ordered by display name.
    ///
    /// ```rust
    /// use bookcase::app::forms::SelectField;
    /// use std::collections::BTreeMap;
    ///
    /// let table = BTreeMap::from([
    ///     ("g2".to_string(), "Poetry".to_string()),
    ///     ("g1".to_string(), "Fantasy".to_string()),
    /// ]);
    /// let field = SelectField::from_table("All Genres", &table);
    /// let labels: Vec<&str> = field.options().iter().map(|o| o.label.as_str()).collect();
    /// assert_eq!(labels, ["All Genres", "Fantasy", "Poetry"]);
    /// assert_eq!(field.value(), "any");
    /// ```
    #[must_use]
    pub fn from_table(any_label: &str, table: &BTreeMap<String, String>) -> Self {
        let mut entries: Vec<(&String, &String)> = table.iter().collect();
        entries.sort_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));

        let options = std::iter::once(SelectOption {
            value: ANY.to_string(),
            label: any_label.to_string(),
        })
        .chain(entries.into_iter().map(|(id, name)| SelectOption {
            value: id.clone(),
            label: name.clone(),
        }))
        .collect();

        Self { options, index: 0 }
    }

    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    fn current(&self) -> Option<&SelectOption> {
        self.options.get(self.index)
    }

    /// Submitted value of the chosen option.
    #[must_use]
    pub fn value(&self) -> &str {
        self.current().map_or(ANY, |option| option.value.as_str())
    }

    #[must_use]
    pub fn label(&self) -> &str {
        self.current().map_or("", |option| option.label.as_str())
    }

    /// Steps to the next (or previous) option, wrapping.
    pub fn cycle(&mut self, forward: bool) {
        let len = self.options.len();
        if len == 0 {
            return;
        }
        self.index = if forward {
            (self.index + 1) % len
        } else {
            (self.index + len - 1) % len
        };
    }

    /// Chooses the option whose value is `value`. Returns `false` if absent.
    pub fn select(&mut self, value: &str) -> bool {
        match self.options.iter().position(|option| option.value == value) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }
}

/// The search form: title text plus author and genre selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub title: String,
    pub author: SelectField,
    pub genre: SelectField,
    focus: SearchField,
}

impl SearchForm {
    /// Empty form with choices taken from the catalog tables.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            title: String::new(),
            author: SelectField::from_table("All Authors", catalog.authors()),
            genre: SelectField::from_table("All Genres", catalog.genres()),
            focus: SearchField::Title,
        }
    }

    #[must_use]
    pub const fn focus(&self) -> SearchField {
        self.focus
    }

    /// Puts the cursor in the title field, as opening the overlay does.
    pub fn focus_title(&mut self) {
        self.focus = SearchField::Title;
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Types into the title field. Ignored while a select is focused.
    pub fn push_char(&mut self, c: char) -> bool {
        if self.focus == SearchField::Title {
            self.title.push(c);
            true
        } else {
            false
        }
    }

    pub fn backspace(&mut self) -> bool {
        self.focus == SearchField::Title && self.title.pop().is_some()
    }

    /// Cycles the focused select. Ignored while the title is focused.
    pub fn cycle(&mut self, forward: bool) -> bool {
        match self.focus {
            SearchField::Title => false,
            SearchField::Author => {
                self.author.cycle(forward);
                true
            }
            SearchField::Genre => {
                self.genre.cycle(forward);
                true
            }
        }
    }

    /// Criteria the form submits.
    #[must_use]
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria::from_form(&self.title, self.author.value(), self.genre.value())
    }
}

/// The settings form: one raw theme value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    value: String,
}

impl SettingsForm {
    /// Form preset to the theme currently applied.
    #[must_use]
    pub fn new(current: ThemeName) -> Self {
        Self {
            value: current.as_str().to_string(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Overwrites the raw value, unchecked.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Steps through the known theme names. An unrecognized value restarts at
    /// the first name.
    pub fn cycle(&mut self, forward: bool) {
        let names = ThemeName::ALL;
        let len = names.len();
        let next = names
            .iter()
            .position(|name| name.as_str() == self.value)
            .map_or(0, |i| if forward { (i + 1) % len } else { (i + len - 1) % len });
        self.value = names[next].as_str().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::filter::Selection;
    use crate::domain::CatalogData;

    fn catalog() -> Catalog {
        let data = CatalogData {
            books_per_page: 2,
            authors: BTreeMap::from([
                ("a1".to_string(), "Zora Vale".to_string()),
                ("a2".to_string(), "Amos Reed".to_string()),
            ]),
            genres: BTreeMap::from([("g7".to_string(), "Biography".to_string())]),
            books: Vec::new(),
        };
        Catalog::new(data).unwrap()
    }

    #[test]
    fn options_sorted_by_display_name() {
        let form = SearchForm::new(&catalog());
        let values: Vec<&str> = form.author.options().iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["any", "a2", "a1"]);
        assert_eq!(form.author.label(), "All Authors");
        assert_eq!(form.genre.label(), "All Genres");
    }

    #[test]
    fn select_cycles_and_wraps() {
        let mut form = SearchForm::new(&catalog());
        form.next_field();
        assert_eq!(form.focus(), SearchField::Author);
        assert!(form.cycle(true));
        assert_eq!(form.author.value(), "a2");
        form.cycle(false);
        form.cycle(false);
        assert_eq!(form.author.value(), "a1");
    }

    #[test]
    fn typing_only_reaches_title() {
        let mut form = SearchForm::new(&catalog());
        assert!(form.push_char('x'));
        form.next_field();
        assert!(!form.push_char('y'));
        assert!(!form.backspace());
        assert_eq!(form.title, "x");

        form.focus_title();
        assert!(form.backspace());
        assert!(!form.backspace());
    }

    #[test]
    fn submits_criteria() {
        let mut form = SearchForm::new(&catalog());
        form.title = "road".to_string();
        assert!(form.genre.select("g7"));
        assert!(!form.genre.select("g99"));

        let criteria = form.to_criteria();
        assert_eq!(criteria.title, "road");
        assert_eq!(criteria.author, Selection::Any);
        assert_eq!(criteria.genre, Selection::Id("g7".to_string()));
    }

    #[test]
    fn settings_cycle() {
        let mut form = SettingsForm::new(ThemeName::Day);
        form.cycle(true);
        assert_eq!(form.value(), "night");
        form.cycle(true);
        assert_eq!(form.value(), "day");

        form.set_value("sepia");
        form.cycle(false);
        assert_eq!(form.value(), "day");
    }
}
