use serde::{Deserialize, Serialize};
use urlencoding::{decode, encode};

/// URL scheme of the app-side deep link.
pub const SCHEME: &str = "tally";
/// Deep link host carrying a settlement handoff.
pub const HOST: &str = "transfer";
/// Sender shown when the parameter is missing or undecodable.
pub const DEFAULT_SENDER: &str = "Tally";

/// A decoded settlement handoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub amount: i64,
    pub sender: String,
}

impl Default for TransferRequest {
    fn default() -> Self {
        TransferRequest {
            amount: 0,
            sender: DEFAULT_SENDER.to_string(),
        }
    }
}

impl TransferRequest {
    pub fn new(amount: i64, sender: &str) -> Self {
        TransferRequest {
            amount,
            sender: sender.to_string(),
        }
    }
}

/// Decode a query string into a transfer request.
///
/// This is a total function: unknown parameters are ignored, a
/// missing or malformed `amount` decodes to 0 and a missing or
/// malformed `sender` decodes to [DEFAULT_SENDER].
pub fn parse_query(query: &str) -> TransferRequest {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut request = TransferRequest::default();
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "amount" => {
                request.amount = value
                    .parse::<i64>()
                    .ok()
                    .filter(|amount| *amount >= 0)
                    .unwrap_or(0);
            }
            "sender" => {
                if escapes_well_formed(value) {
                    if let Ok(sender) = decode(value) {
                        if !sender.is_empty() {
                            request.sender = sender.into_owned();
                        }
                    }
                }
            }
            _ => {}
        }
    }
    request
}

/// Every `%` must start a two-hex-digit escape. The decoder below
/// passes broken escapes through literally, so they are rejected
/// here before the value can replace the default.
fn escapes_well_formed(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len()
                || !bytes[i + 1].is_ascii_hexdigit()
                || !bytes[i + 2].is_ascii_hexdigit()
            {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}

/// Decode an app deep link of the form
/// `tally://transfer?amount=<int>&sender=<urlencoded>`.
///
/// A wrong scheme or host is not a settlement handoff and yields
/// `None`; the caller ignores it. Parameter defaulting follows
/// [parse_query].
pub fn parse_deep_link(url: &str) -> Option<TransferRequest> {
    let rest = url.strip_prefix(SCHEME)?.strip_prefix("://")?;
    let (host, query) = match rest.split_once('?') {
        Some((host, query)) => (host, query),
        None => (rest, ""),
    };
    if host.trim_end_matches('/') != HOST {
        return None;
    }
    Some(parse_query(query))
}

/// Encode a transfer request as a query string.
pub fn encode_query(request: &TransferRequest) -> String {
    format!(
        "amount={}&sender={}",
        request.amount,
        encode(&request.sender)
    )
}

/// Encode a transfer request as an app deep link.
pub fn encode_deep_link(request: &TransferRequest) -> String {
    format!("{}://{}?{}", SCHEME, HOST, encode_query(request))
}

/// Build the web handoff URL for a given page.
pub fn web_url(base: &str, request: &TransferRequest) -> String {
    format!("{}?{}", base, encode_query(request))
}
