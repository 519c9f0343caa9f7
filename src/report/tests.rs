//! Report Module Tests
//!
//! ## Test Scopes
//! - **Naming**: mode, year and month in the file name.
//! - **Rendering**: padding and capitalization of each line.
//! - **Persistence**: the written file is a JSON array of the rendered lines.

#[cfg(test)]
mod tests {
    use crate::aggregate::ranking::RankedEntry;
    use crate::pipeline::types::ConferenceMonth;
    use crate::report::writer::{render_line, render_lines, write_report, ReportMode, ReportName};

    fn entry(rank: usize, word: &str, count: usize) -> RankedEntry {
        RankedEntry {
            rank,
            word: word.to_string(),
            count,
        }
    }

    #[test]
    fn test_file_name_core() {
        let name = ReportName {
            mode: ReportMode::from_filtering(true),
            year: 2021,
            month: ConferenceMonth::April,
        };

        assert_eq!(name.file_name(), "core-2021-04-conference.json");
    }

    #[test]
    fn test_file_name_all() {
        let name = ReportName {
            mode: ReportMode::from_filtering(false),
            year: 2023,
            month: ConferenceMonth::October,
        };

        assert_eq!(name.to_string(), "all-2023-10-conference.json");
    }

    #[test]
    fn test_render_line_padding() {
        let line = render_line(&entry(1, "christ", 412));

        assert_eq!(line, "1  : Christ                  : 412");
    }

    #[test]
    fn test_render_line_long_values_not_truncated() {
        let word = "a".repeat(30);
        let line = render_line(&entry(1234, &word, 1));

        assert_eq!(line, format!("1234: A{}: 1", "a".repeat(29)));
    }

    #[tokio::test]
    async fn test_write_report_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("reports");
        let name = ReportName {
            mode: ReportMode::Core,
            year: 2021,
            month: ConferenceMonth::April,
        };
        let entries = vec![entry(1, "faith", 3), entry(2, "hope", 2)];

        let path = write_report(&out_dir, &name, &entries).await.unwrap();

        assert_eq!(path, out_dir.join("core-2021-04-conference.json"));
        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<String> = serde_json::from_str(&written).unwrap();
        assert_eq!(lines, render_lines(&entries));
        assert!(!written.contains('\n'));
    }

    #[tokio::test]
    async fn test_write_report_empty_ranking() {
        let dir = tempfile::tempdir().unwrap();
        let name = ReportName {
            mode: ReportMode::All,
            year: 2022,
            month: ConferenceMonth::October,
        };

        let path = write_report(dir.path(), &name, &[]).await.unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "[]");
    }
}
