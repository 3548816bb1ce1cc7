use hyprhide_core::WindowRecord;

pub struct TableFormatter {
    address_width: usize,
    class_width: usize,
    title_width: usize,
    workspace_width: usize,
    position_width: usize,
    hidden_width: usize,
}

impl TableFormatter {
    pub fn new(records: &[WindowRecord]) -> Self {
        let address_width = records
            .iter()
            .map(|r| address_cell(r).chars().count())
            .max()
            .unwrap_or(14)
            .clamp(7, 24); // Between "Address" header and a long Hyprland address

        let class_width = records
            .iter()
            .map(|r| r.class.chars().count())
            .max()
            .unwrap_or(5)
            .clamp(5, 20);

        Self {
            address_width,
            class_width,
            title_width: 40,
            workspace_width: 9,
            position_width: 13,
            hidden_width: 19,
        }
    }

    pub fn print_table(&self, records: &[WindowRecord]) {
        self.print_header();
        for record in records {
            self.print_row(record);
        }
        self.print_footer();
    }

    fn print_header(&self) {
        println!("{}", self.top_border());
        println!(
            "{}",
            self.row(["Address", "Class", "Title", "Workspace", "Position", "Hidden"])
        );
        println!("{}", self.separator());
    }

    fn print_footer(&self) {
        println!("{}", self.bottom_border());
    }

    fn print_row(&self, record: &WindowRecord) {
        let address = address_cell(record);
        let workspace = record.workspace.to_string();
        let position = record.position.to_string();
        let hidden: String = record
            .hidden_at
            .replacen('T', " ", 1)
            .chars()
            .take(self.hidden_width)
            .collect();
        println!(
            "{}",
            self.row([
                &address,
                &record.class,
                &record.title,
                &workspace,
                &position,
                &hidden,
            ])
        );
    }

    fn widths(&self) -> [usize; 6] {
        [
            self.address_width,
            self.class_width,
            self.title_width,
            self.workspace_width,
            self.position_width,
            self.hidden_width,
        ]
    }

    fn row(&self, cells: [&str; 6]) -> String {
        let cells: Vec<String> = cells
            .iter()
            .zip(self.widths())
            .map(|(cell, width)| truncate(cell, width))
            .collect();
        format!("│ {} │", cells.join(" │ "))
    }

    fn border(&self, left: &str, mid: &str, right: &str) -> String {
        let segments: Vec<String> = self.widths().iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    }

    fn top_border(&self) -> String {
        self.border("┌", "┬", "┐")
    }

    fn separator(&self) -> String {
        self.border("├", "┼", "┤")
    }

    fn bottom_border(&self) -> String {
        self.border("└", "┴", "┘")
    }
}

fn address_cell(record: &WindowRecord) -> String {
    if record.synthesized {
        format!("{}*", record.address)
    } else {
        record.address.clone()
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings
/// including emoji and multi-byte characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
