/// Marker pair emitted by reasoning models around internal monologue.
const THINK_OPEN: &str = "<think>";
const THINK_CLOSE: &str = "</think>";

/// Strip every `<think>…</think>` segment (markers included) from a raw
/// completion and trim the result. Segments may span newlines; all
/// occurrences are removed, each ending at the first close marker.
///
/// An open marker with no matching close leaves the remainder untouched:
/// better to show stray markup than to delete the rest of the narration.
/// Idempotent, and identity on marker-free text.
pub fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(open) = rest.find(THINK_OPEN) {
        let after_open = &rest[open + THINK_OPEN.len()..];
        match after_open.find(THINK_CLOSE) {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &after_open[close + THINK_CLOSE.len()..];
            }
            None => {
                // Unmatched open marker: conservative pass-through.
                out.push_str(rest);
                rest = "";
                break;
            }
        }
    }
    out.push_str(rest);

    out.trim().to_string()
}
