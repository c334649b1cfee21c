use crate::models::row::Row;

const TABLE_OPEN: &str = "<table>\n<tbody>\n";
const TABLE_CLOSE: &str = "\n</tbody>\n</table>\n";

/// Render rows (header first) as a bare `<table><tbody>` fragment.
///
/// Cell text is written as-is. The layout (blank line between blocks, tab
/// before every cell but the first) is what existing timelog pages contain,
/// so a rewritten file diffs cleanly against the previous one.
pub fn render_table<'a, I>(rows: I) -> String
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut blocks = vec![TABLE_OPEN.to_string()];

    for row in rows {
        let cells = row
            .iter()
            .map(|cell| format!("<td>{}</td>", cell))
            .collect::<Vec<_>>()
            .join("\n\t");
        blocks.push(format!("<tr>\n{}\n</tr>\n", cells));
    }

    blocks.push(TABLE_CLOSE.to_string());
    blocks.join("\n")
}
