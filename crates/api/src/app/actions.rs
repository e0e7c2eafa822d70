//! Session mutations shared by the page and JSON routes.
//!
//! Each action mutates the session in place and returns the notice to show.

use magazyn_core::DomainResult;
use magazyn_infra::Session;

use crate::app::notice::Notice;

/// Submit the add form: consume the bound input field and append its value.
///
/// The field is cleared regardless of outcome, like a form that resets on submit.
pub fn submit_product_input(session: &mut Session) -> DomainResult<Notice> {
    let name = std::mem::take(&mut session.product_input);
    add_product(session, name)
}

pub fn add_product(session: &mut Session, name: String) -> DomainResult<Notice> {
    match session.inventory.add(name.clone()) {
        Ok(()) => {
            tracing::info!(
                session_id = %session.id(),
                product = %name,
                items = session.inventory.len(),
                "product added"
            );
            Ok(Notice::added(&name))
        }
        Err(e) => {
            tracing::warn!(session_id = %session.id(), "rejected empty product name");
            Err(e)
        }
    }
}

pub fn remove_product(session: &mut Session, name: &str) -> DomainResult<Notice> {
    let index = session.inventory.remove(name)?;
    log_removal(session, name, index);
    Ok(Notice::removed(name))
}

/// Remove the row rendered at `index`.
pub fn remove_row(session: &mut Session, index: usize, name: &str) -> DomainResult<Notice> {
    let removed_at = session.inventory.remove_at(index, name)?;
    log_removal(session, name, removed_at);
    Ok(Notice::removed(name))
}

fn log_removal(session: &Session, name: &str, index: usize) {
    tracing::info!(
        session_id = %session.id(),
        product = %name,
        index,
        items = session.inventory.len(),
        "product removed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::notice::NoticeLevel;
    use chrono::Utc;
    use magazyn_core::{DomainError, SessionId};

    fn session() -> Session {
        Session::start(SessionId::new(), Utc::now())
    }

    #[test]
    fn submit_appends_and_clears_field() {
        let mut s = session();
        s.product_input = "Piła".to_string();

        let notice = submit_product_input(&mut s).unwrap();

        assert_eq!(notice, Notice::added("Piła"));
        assert!(s.product_input.is_empty());
        assert_eq!(s.inventory.items().last().map(String::as_str), Some("Piła"));
    }

    #[test]
    fn submit_of_empty_field_warns() {
        let mut s = session();
        let err = submit_product_input(&mut s).unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(Notice::for_error(&err).level, NoticeLevel::Warning);
        assert_eq!(s.inventory.len(), 3);
    }

    #[test]
    fn remove_missing_product_maps_to_error_notice() {
        let mut s = session();
        let err = remove_product(&mut s, "Piła").unwrap_err();
        let notice = Notice::for_error(&err);

        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Error: product 'Piła' not found.");
    }

    #[test]
    fn remove_row_reports_info() {
        let mut s = session();
        let notice = remove_row(&mut s, 1, "Śrubokręt").unwrap();

        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(notice.message, "Removed: Śrubokręt");
        assert_eq!(s.inventory.items(), ["Młotek", "Wkręty M4"]);
    }
}
