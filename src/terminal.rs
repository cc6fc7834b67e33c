//! Plain-text presentation of recommendation cards

use std::io::Write;

use crate::Result;
use crate::models::DisplayRecord;
use crate::render::PresentationSink;

/// Writes one card per record to any writer
pub struct TerminalSink<W: Write> {
    out: W,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_card(&mut self, index: usize, record: &DisplayRecord) -> Result<()> {
        let destination = &record.destination;
        writeln!(self.out, "{}. {}", index + 1, destination.name)?;
        if !destination.description.is_empty() {
            writeln!(self.out, "   {}", destination.description)?;
        }
        if !destination.image_url.is_empty() {
            writeln!(self.out, "   🖼️ {}", destination.image_url)?;
        }
        if record.has_clock() {
            writeln!(self.out, "   ⏰ Current local time: {}", record.current_time)?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> PresentationSink for TerminalSink<W> {
    fn show_recommendations(&mut self, records: &[DisplayRecord]) -> Result<()> {
        for (index, record) in records.iter().enumerate() {
            self.write_card(index, record)?;
        }
        Ok(())
    }

    fn show_no_recommendations(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    fn bring_into_view(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DestinationRecord;

    fn output(sink: TerminalSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn test_card_contains_all_parts() {
        let mut sink = TerminalSink::new(Vec::new());
        let record = DisplayRecord {
            destination: DestinationRecord::new(
                "Tokyo, Japan",
                "https://example.com/tokyo.avif",
                "A bustling metropolis.",
                "Asia/Tokyo",
            ),
            current_time: "9:00:00 PM".to_string(),
        };
        sink.show_recommendations(&[record]).unwrap();
        sink.bring_into_view().unwrap();

        let text = output(sink);
        assert!(text.starts_with("1. Tokyo, Japan\n"));
        assert!(text.contains("A bustling metropolis."));
        assert!(text.contains("https://example.com/tokyo.avif"));
        assert!(text.contains("Current local time: 9:00:00 PM"));
    }

    #[test]
    fn test_card_without_clock() {
        let mut sink = TerminalSink::new(Vec::new());
        let record = DisplayRecord {
            destination: DestinationRecord::new("Atlantis", "", "", ""),
            current_time: String::new(),
        };
        sink.show_recommendations(&[record]).unwrap();

        let text = output(sink);
        assert_eq!(text, "1. Atlantis\n\n");
    }

    #[test]
    fn test_empty_message() {
        let mut sink = TerminalSink::new(Vec::new());
        sink.show_no_recommendations("Nothing here").unwrap();
        assert_eq!(output(sink), "Nothing here\n");
    }
}
