use tally_data::Contact;
use tally_link::{format_amount, web_url, TransferRequest};

use crate::split::{RemainderPolicy, Split, SplitError};

/// An ephemeral settlement request: who owes how much, right now.
/// Never persisted; a ledger entry only appears once the counter
/// side completes the transfer.
#[derive(Debug, Clone)]
pub struct SettlementRequest {
    pub total: i64,
    pub participants: Vec<Contact>,
    split: Split,
}

impl SettlementRequest {
    /// Build a request for a total over a participant list which
    /// conventionally includes the requester.
    pub fn new(total: i64, participants: Vec<Contact>) -> Result<Self, SplitError> {
        let split = Split::divide(total, participants.len() as u32)?;
        Ok(SettlementRequest {
            total,
            participants,
            split,
        })
    }

    pub fn split(&self) -> &Split {
        &self.split
    }

    /// Everyone who should be notified: all participants except
    /// the requester.
    pub fn recipients(&self, requester: &Contact) -> Vec<&Contact> {
        self.participants
            .iter()
            .filter(|contact| contact.id != requester.id)
            .collect()
    }

    /// Display note for the legacy remainder convention. No
    /// accounting effect.
    pub fn remainder_note(&self, policy: RemainderPolicy) -> Option<String> {
        if policy == RemainderPolicy::BankAbsorbs && self.split.remainder > 0 {
            Some(format!(
                "The remaining {} is covered by the bank",
                format_amount(self.split.remainder)
            ))
        } else {
            None
        }
    }

    /// The message sent to each recipient, ending in the web
    /// handoff link that carries the per-person share.
    pub fn render_message(&self, requester: &Contact, link_base: &str) -> String {
        let handoff = TransferRequest::new(self.split.share, &requester.name);
        format!(
            "{sender} sent you a settlement request\n\
             {count} people are splitting this bill\n\
             Total: {total}\n\
             Your share: {share}\n\
             {link}",
            sender = requester.name,
            count = self.participants.len(),
            total = format_amount(self.total),
            share = format_amount(self.split.share),
            link = web_url(link_base, &handoff),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: u32, name: &str) -> Contact {
        Contact {
            id,
            name: name.to_string(),
            phone: format!("010-0000-{:04}", id),
        }
    }

    fn request() -> (Contact, SettlementRequest) {
        let me = contact(1, "Ann");
        let participants =
            vec![me.clone(), contact(2, "Bo"), contact(3, "조세현")];
        let request = SettlementRequest::new(16666, participants).unwrap();
        (me, request)
    }

    #[test]
    fn test_request_split() {
        let (_, request) = request();
        assert_eq!(request.split().share, 5555);
        assert_eq!(request.split().remainder, 1);
    }

    #[test]
    fn test_request_rejects_empty() {
        assert_eq!(
            SettlementRequest::new(16666, vec![]).unwrap_err(),
            SplitError::NoParticipants
        );
    }

    #[test]
    fn test_recipients_exclude_requester() {
        let (me, request) = request();
        let recipients = request.recipients(&me);
        assert_eq!(recipients.len(), 2);
        assert!(recipients.iter().all(|c| c.id != me.id));
    }

    #[test]
    fn test_remainder_note() {
        let (_, request) = request();
        let note = request.remainder_note(RemainderPolicy::BankAbsorbs).unwrap();
        assert!(note.contains('1'));
        assert!(request
            .remainder_note(RemainderPolicy::FirstPayerAbsorbs)
            .is_none());

        let even = SettlementRequest::new(15000, vec![
            contact(1, "Ann"), contact(2, "Bo"), contact(3, "Cy"),
        ])
        .unwrap();
        assert!(even.remainder_note(RemainderPolicy::BankAbsorbs).is_none());
    }

    #[test]
    fn test_render_message() {
        let (me, request) = request();
        let message = request.render_message(&me, "https://tally.example/settle");

        assert!(message.contains("Ann sent you a settlement request"));
        assert!(message.contains("3 people"));
        assert!(message.contains("Total: 16,666"));
        assert!(message.contains("Your share: 5,555"));
        assert!(message
            .contains("https://tally.example/settle?amount=5555&sender=Ann"));
    }
}
