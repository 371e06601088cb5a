//! Plain-text edge lists: one `from to capacity` triple per line

use anyhow::{bail, Context, Result};
use augment_core::{Capacity, FlowNetwork};

/// Parse an edge list into a network with string labels.
///
/// Blank lines and everything after `#` are ignored. Negative capacities
/// are rejected with the offending line number.
pub fn parse_edge_list(text: &str) -> Result<FlowNetwork<String>> {
    let mut network = FlowNetwork::new();

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [from, to, capacity] = fields.as_slice() else {
            bail!(
                "line {}: expected `from to capacity`, found {} fields",
                line_no,
                fields.len()
            );
        };

        let capacity: Capacity = capacity
            .parse()
            .with_context(|| format!("line {}: invalid capacity `{}`", line_no, capacity))?;

        network
            .add_edge(from.to_string(), to.to_string(), capacity)
            .with_context(|| format!("line {}", line_no))?;
    }

    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_comments_and_blanks() {
        let text = "# diamond\nS A 3\nS B 2   # second\n\nA T 2\nB T 3\n";
        let network = parse_edge_list(text).unwrap();

        assert_eq!(network.edge_count(), 4);
        assert_eq!(network.vertex_count(), 4);
        assert_eq!(network.find_edge("S", "B").unwrap().capacity(), 2);
    }

    #[test]
    fn test_wrong_field_count_reports_line() {
        let err = parse_edge_list("S A 3\nA T\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_bad_capacity_reports_line() {
        let err = parse_edge_list("S A three\n").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_negative_capacity_rejected() {
        let err = parse_edge_list("S A 1\nA T -4\n").unwrap_err();
        assert!(format!("{:#}", err).contains("Negative capacity -4"));
    }

    #[test]
    fn test_capacity_total_overflow_reports_line() {
        let text = "S T 9223372036854775807\nS T 9223372036854775807\n";
        let err = parse_edge_list(text).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("line 2"));
        assert!(message.contains("network total"));
    }
}
