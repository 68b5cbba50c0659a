//! Registry boundary for live option lists.

use crate::Choice;

/// Read-only directory of currently available service variants.
///
/// This is the interface boundary to whatever live registry knows
/// which decodable services exist right now. The core never caches
/// directory results: directory-backed fields query it once, at
/// construction time, and callers must construct such fields fresh per
/// request so option lists never go stale.
///
/// # Example
///
/// ```
/// use formkit_field::{Choice, MultiCheckboxField, ServiceDirectory};
///
/// struct FixedDirectory;
///
/// impl ServiceDirectory for FixedDirectory {
///     fn available(&self) -> Vec<Choice> {
///         vec![Choice::new("ft8", "FT8"), Choice::new("wspr", "WSPR")]
///     }
/// }
///
/// // Constructed per request, not cached.
/// let field = MultiCheckboxField::from_directory("services", "Services", &FixedDirectory);
/// ```
pub trait ServiceDirectory {
    /// Returns the currently available variants as choices.
    fn available(&self) -> Vec<Choice>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Directory whose contents change between queries, as a live
    /// registry's would.
    struct MutableDirectory {
        entries: RefCell<Vec<Choice>>,
    }

    impl ServiceDirectory for MutableDirectory {
        fn available(&self) -> Vec<Choice> {
            self.entries.borrow().clone()
        }
    }

    #[test]
    fn directory_reflects_current_state() {
        let dir = MutableDirectory {
            entries: RefCell::new(vec![Choice::new("ft8", "FT8")]),
        };
        assert_eq!(dir.available().len(), 1);

        dir.entries.borrow_mut().push(Choice::new("wspr", "WSPR"));
        assert_eq!(dir.available().len(), 2);
    }
}
