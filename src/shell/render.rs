//! Text rendering for the menu shell.

use cellshare_core::{AccessLevel, Grid};
use cellshare_engine::format_number;

pub const MENU: &str = "\
---------------Menu---------------
1. Create a user.
2. Create a sheet.
3. Check a sheet.
4. Change a value in a sheet.
5. Change a sheet's access right. (ReadOnly/Editable)
6. Collaborate with an other user.
7. List a user's sheets.
Please enter \"exit\" if you want to leave.
----------------------------------
";

/// A grid as rows of space-separated values, framed by blank lines.
pub fn render_grid(grid: &Grid, precision: usize) -> String {
    let mut out = String::from("\n");
    for row in grid {
        for value in row {
            out.push_str(&format_number(*value, precision));
            out.push(' ');
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

/// One `name level` line per sheet.
pub fn render_sheets(sheets: &[(String, AccessLevel)]) -> String {
    if sheets.is_empty() {
        return "No sheets.\n\n".to_string();
    }
    let mut out = String::new();
    for (name, level) in sheets {
        out.push_str(&format!("{} {}\n", name, level));
    }
    out.push('\n');
    out
}
