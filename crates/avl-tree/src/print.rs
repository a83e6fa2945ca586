//! Box-drawing dump of nested structures, used by the tree's `Debug` output.

/// Renders one child given the indentation its own children must use.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// Draws `children` below a parent line, one branch per present child.
///
/// Absent trailing children are skipped; an absent child in the middle is
/// skipped too, but still counts when deciding which branch is the last one.
pub fn print_tree(tab: &str, children: &[Option<&PrintChild<'_>>]) -> String {
    let mut out = String::new();

    let Some(last) = children.iter().rposition(Option::is_some) else {
        return out;
    };

    for (i, child) in children.iter().enumerate().take(last + 1) {
        let Some(child) = child else {
            continue;
        };

        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let rendered = child(&child_tab);
        let branch = if rendered.is_empty() {
            "│"
        } else if is_last {
            "└─"
        } else {
            "├─"
        };

        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        if !rendered.is_empty() {
            out.push(' ');
            out.push_str(&rendered);
        }
    }

    out
}
