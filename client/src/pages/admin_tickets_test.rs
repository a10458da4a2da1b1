use super::*;

#[test]
fn cancel_hidden_for_cancelled_tickets() {
    assert!(TicketAction::Cancel.applies_to(TicketStatus::Reserved));
    assert!(TicketAction::Cancel.applies_to(TicketStatus::Paid));
    assert!(!TicketAction::Cancel.applies_to(TicketStatus::Cancelled));
}

#[test]
fn delete_always_offered() {
    for status in [TicketStatus::Reserved, TicketStatus::Paid, TicketStatus::Cancelled] {
        assert!(TicketAction::Delete.applies_to(status));
    }
}

#[test]
fn action_titles_differ() {
    assert_ne!(TicketAction::Cancel.done_title(), TicketAction::Delete.done_title());
    assert_ne!(TicketAction::Cancel.failure_title(), TicketAction::Delete.failure_title());
}
