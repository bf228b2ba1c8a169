//! Tests for the solution sheet

#[cfg(test)]
mod tests {
    use queens_trace::io::configuration::SHEET_BACKGROUND;
    use queens_trace::io::image::{export_solution_sheet, render_solution_sheet};
    use queens_trace::playback::collect_solutions;
    use queens_trace::{BoardSize, QueensError, Step, solve};
    use tempfile::TempDir;

    fn trace(n: usize) -> Vec<Step> {
        BoardSize::new(n).map_or_else(|error| unreachable!("{error}"), |size| solve(size, None))
    }

    // Tests a single row of boards with gaps on every side
    // Verified by omitting the outer gap
    #[test]
    fn test_sheet_single_row() {
        let sheet = render_solution_sheet(&collect_solutions(&trace(4)), 10);
        assert_eq!(sheet.as_ref().map(image::RgbaImage::dimensions), Some((104, 56)));
        assert_eq!(sheet.map(|img| img.get_pixel(0, 0).0), Some(SHEET_BACKGROUND));
    }

    // Tests boards wrap onto new rows
    // Verified by laying every board on one row
    #[test]
    fn test_sheet_wraps_rows() {
        let sheet = render_solution_sheet(&collect_solutions(&trace(8)), 4);
        assert_eq!(sheet.map(|img| img.dimensions()), Some((328, 488)));
    }

    // Tests there is no sheet without solutions
    // Verified by returning a blank image
    #[test]
    fn test_sheet_without_solutions() {
        assert!(render_solution_sheet(&collect_solutions(&trace(3)), 10).is_none());
    }

    // Tests the sheet is saved as a readable PNG
    // Verified by saving under a different extension
    #[test]
    fn test_export_solution_sheet() {
        let Ok(dir) = TempDir::new() else {
            unreachable!("Temporary directory is available");
        };
        let path = dir.path().join("sheets/six.png");

        let count = export_solution_sheet(&trace(6), &path, 6);
        assert_eq!(count.ok(), Some(4));

        let reopened = image::open(&path).map(|img| (img.width(), img.height()));
        assert_eq!(reopened.ok(), Some((4 * 36 + 5 * 8, 36 + 2 * 8)));
    }

    // Tests exporting without solutions reports an empty artifact
    // Verified by writing an empty file
    #[test]
    fn test_export_without_solutions() {
        let Ok(dir) = TempDir::new() else {
            unreachable!("Temporary directory is available");
        };
        let path = dir.path().join("none.png");

        let result = export_solution_sheet(&trace(2), &path, 6);
        assert!(matches!(
            result,
            Err(QueensError::EmptyTrace {
                artifact: "solution sheet"
            })
        ));
        assert!(!path.exists());
    }
}
