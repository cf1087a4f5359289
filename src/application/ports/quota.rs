/// Phrases the remote provider uses to report an exhausted usage allowance.
/// The provider does not expose a structured code for this on the error
/// path we receive, so classification stays substring-based.
const EXHAUSTION_MARKERS: [&str; 2] = ["insufficient_quota", "You exceeded your current quota"];

pub(crate) fn message_indicates_exhaustion(message: &str) -> bool {
    EXHAUSTION_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
}
