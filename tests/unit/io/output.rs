//! Tests for the text listing and batched HTML pages

#[cfg(test)]
mod tests {
    use partridge::algorithm::{Inventory, Searcher, Solution, SolutionSink};
    use partridge::io::output::{OutputConfig, SolutionWriter, html_file_name, render_html};
    use partridge::spatial::{Grid, Location};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn scratch() -> TempDir {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory available");
        };
        dir
    }

    fn read(path: &Path) -> String {
        std::fs::read_to_string(path).unwrap_or_default()
    }

    // Runs configuration 3 into a writer and returns the pages it opened
    fn write_fixture(config: OutputConfig) -> (u64, Vec<PathBuf>) {
        let Some(inventory) = Inventory::test_configuration(3) else {
            unreachable!("configuration 3 exists");
        };
        let Ok(mut writer) = SolutionWriter::create(config) else {
            unreachable!("output directory is writable");
        };
        let result = Searcher::new(inventory).run(&mut writer, &mut ());
        assert!(result.is_ok());

        let written = writer.written();
        let pages = writer.pages().to_vec();
        assert!(writer.finish().is_ok());
        (written, pages)
    }

    #[test]
    fn test_html_file_names() {
        assert_eq!(html_file_name(1), "Solutions00000.html");
        assert_eq!(html_file_name(0), "Solutions00000.html");
        assert_eq!(html_file_name(1000), "Solutions01000.html");
        assert_eq!(html_file_name(12000), "Solutions12000.html");
    }

    #[test]
    fn test_render_html_lists_every_piece() {
        let mut grid = Grid::new(3, 2);
        grid.place(Location::ORIGIN, 2);
        for location in [
            Location::new(2, 0),
            Location::new(2, 1),
            Location::new(0, 2),
            Location::new(1, 2),
            Location::new(2, 2),
        ] {
            grid.place(location, 1);
        }

        let html = render_html(&Solution::new(7, &grid));
        assert!(html.starts_with("<h1>Solution 7</h1>\n<div class=\"grid\">"));
        assert!(html.ends_with("</div>\n"));
        assert_eq!(html.matches("class=\"square ").count(), 6);
        assert!(html.contains(
            "class=\"square s2 c2 x1 y1\" style=\"grid-column: 1 / span 2; grid-row: 2 / span 2;\""
        ));
        assert!(html.contains("class=\"square s1 c1 x3 y3\""));
    }

    // Batches of ten give pages starting at 0, 10, 20 and 30
    #[test]
    fn test_writer_batches_html_pages() {
        let dir = scratch();
        let mut config = OutputConfig::new(dir.path());
        config.html_batch_size = 10;

        let (written, pages) = write_fixture(config);
        assert_eq!(written, 32);

        let names: Vec<String> = pages
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "Solutions00000.html",
                "Solutions00010.html",
                "Solutions00020.html",
                "Solutions00030.html",
            ]
        );

        let first = read(&dir.path().join("Solutions00000.html"));
        assert!(first.starts_with("<!DOCTYPE html>"));
        assert!(first.ends_with("</body>\n</html>\n"));
        assert_eq!(first.matches("<h1>Solution ").count(), 9);

        let last = read(&dir.path().join("Solutions00030.html"));
        assert_eq!(last.matches("<h1>Solution ").count(), 3);
    }

    #[test]
    fn test_writer_text_listing() {
        let dir = scratch();
        let (_, _) = write_fixture(OutputConfig::new(dir.path()));

        let text = read(&dir.path().join("Solutions.txt"));
        assert_eq!(text.matches("Solution number ").count(), 32);
        assert!(text.starts_with("Solution number 1\n"));
        assert!(text.contains("Solution number 32\n"));

        // Every block is the six-row rendering followed by a blank line
        let first_block: Vec<&str> = text.lines().skip(1).take(7).collect();
        assert_eq!(first_block.len(), 7);
        assert!(first_block.iter().take(6).all(|row| row.len() == 6));
        assert_eq!(first_block.last().copied(), Some(""));
    }

    #[test]
    fn test_custom_markup_and_png_limit() {
        let dir = scratch();
        let mut config = OutputConfig::new(dir.path());
        config.html_head = "<main>\n".to_string();
        config.html_footer = "</main>\n".to_string();
        config.png_limit = 2;

        let (_, pages) = write_fixture(config);
        assert_eq!(pages.len(), 1);

        let page = read(&dir.path().join("Solutions00000.html"));
        assert!(page.starts_with("<main>\n"));
        assert!(page.ends_with("</main>\n"));

        assert!(dir.path().join("solution_00001.png").exists());
        assert!(dir.path().join("solution_00002.png").exists());
        assert!(!dir.path().join("solution_00003.png").exists());
    }

    #[test]
    fn test_writer_counts_direct_accepts() {
        let dir = scratch();
        let Ok(mut writer) = SolutionWriter::create(OutputConfig::new(dir.path().join("fresh")))
        else {
            unreachable!("output directory is writable");
        };
        assert_eq!(writer.text_path(), dir.path().join("fresh").join("Solutions.txt"));

        let mut grid = Grid::new(1, 1);
        grid.place(Location::ORIGIN, 1);
        assert!(writer.accept(&Solution::new(1, &grid)).is_ok());
        assert_eq!(writer.written(), 1);
        assert!(writer.finish().is_ok());

        let text = read(&dir.path().join("fresh").join("Solutions.txt"));
        assert_eq!(text, "Solution number 1\n1\n\n\n");
    }
}
