use crate::canvas::Canvas;
use crate::layout::grid::GridCursor;
use crate::layout::label::LabelRenderer;
use crate::record::Record;
use log::{debug, warn};

/// Totals from laying out a run of labels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// How many labels were drawn
    pub labels: usize,
    /// How many pages were drawn on
    pub pages: usize,
    /// Indices of the records whose text is taller than a label
    pub overflowing: Vec<usize>,
}

/// Lay out every record, in order, across as many pages as it takes.
///
/// The cursor reports when it crosses onto a new page, but the page is only started
/// once there is another record to put on it. Input that exactly fills its last page
/// therefore doesn't end in a blank page, and no records at all means no pages at all.
pub fn render_labels<C: Canvas + ?Sized>(
    canvas: &mut C,
    renderer: &LabelRenderer<C::Face>,
    records: &[Record],
) -> RenderSummary {
    let mut summary = RenderSummary::default();
    if records.is_empty() {
        warn!("no address records to lay out, the document will have no pages");
        return summary;
    }

    let mut cursor = GridCursor::new(*renderer.geometry());
    let mut page_pending = false;
    summary.pages = 1;

    for (index, record) in records.iter().enumerate() {
        if page_pending {
            debug!("page {} is full, starting a new one", summary.pages);
            canvas.show_page();
            summary.pages += 1;
        }

        let layout = renderer.render(canvas, record, cursor.cell());
        if layout.overflows {
            warn!(
                "label {} ({}) needs {} of height but labels are only {} high",
                index + 1,
                record.name,
                layout.content_height,
                renderer.geometry().label_height
            );
            summary.overflowing.push(index);
        }
        summary.labels += 1;

        let (next, page_crossed) = cursor.advance();
        cursor = next;
        page_pending = page_crossed;
    }

    summary
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::canvas::FontState;
    use crate::layout::grid::GridGeometry;
    use crate::layout::label::FontStyles;
    use crate::layout::testing::{DrawCall, RecordingCanvas, FACE_BOLD, FACE_REGULAR};
    use crate::units::Pt;

    fn renderer(geometry: GridGeometry) -> LabelRenderer<&'static str> {
        LabelRenderer::new(
            geometry,
            FontStyles {
                name: FontState::new(FACE_BOLD, Pt(10.0)),
                address: FontState::new(FACE_REGULAR, Pt(8.0)),
            },
            0.2,
            true,
        )
    }

    /// 2 columns by 3 rows
    fn two_by_three() -> GridGeometry {
        GridGeometry {
            label_width: Pt(100.0),
            label_height: Pt(100.0),
            page_width: Pt(200.0),
            page_height: Pt(300.0),
            ..GridGeometry::default()
        }
    }

    fn records(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record::new(format!("Person {i}"), "Street".into(), "1000".into(), "City".into(), String::new()))
            .collect()
    }

    fn borders(calls: &[DrawCall]) -> Vec<crate::rect::Rect> {
        calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Rect(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn no_records_no_pages() {
        let mut canvas = RecordingCanvas::default();
        let summary = render_labels(&mut canvas, &renderer(two_by_three()), &[]);
        assert_eq!(summary, RenderSummary::default());
        assert!(canvas.calls.is_empty());
    }

    #[test]
    fn fills_rows_left_to_right() {
        let mut canvas = RecordingCanvas::default();
        let summary = render_labels(&mut canvas, &renderer(two_by_three()), &records(3));
        assert_eq!(summary.labels, 3);
        assert_eq!(summary.pages, 1);

        let cells: Vec<(Pt, Pt)> = borders(&canvas.calls).iter().map(|r| (r.x1, r.y1)).collect();
        assert_eq!(
            cells,
            vec![(Pt(0.0), Pt(200.0)), (Pt(100.0), Pt(200.0)), (Pt(0.0), Pt(100.0))]
        );
    }

    #[test]
    fn more_records_than_fit_across_make_more_rows() {
        let geometry = two_by_three();
        // 3 * (100 + 0) > 200
        let mut canvas = RecordingCanvas::default();
        render_labels(&mut canvas, &renderer(geometry), &records(3));
        let rows: std::collections::BTreeSet<i64> = borders(&canvas.calls)
            .iter()
            .map(|r| r.y1.0 as i64)
            .collect();
        assert!(rows.len() >= 2);
    }

    #[test]
    fn overflowing_a_page_starts_another() {
        let mut canvas = RecordingCanvas::default();
        let summary = render_labels(&mut canvas, &renderer(two_by_three()), &records(7));
        assert_eq!(summary.pages, 2);

        let pages = canvas.pages();
        assert_eq!(pages.len(), 2);
        assert_eq!(borders(&pages[0]).len(), 6);
        assert_eq!(borders(&pages[1]).len(), 1);
        // the first label on the new page goes back to the top-left cell
        assert_eq!(borders(&pages[1])[0].x1, Pt(0.0));
        assert_eq!(borders(&pages[1])[0].y1, Pt(200.0));
    }

    #[test]
    fn exactly_full_pages_leave_no_blank_page() {
        for full_pages in 1..=3 {
            let mut canvas = RecordingCanvas::default();
            let summary = render_labels(
                &mut canvas,
                &renderer(two_by_three()),
                &records(6 * full_pages),
            );
            assert_eq!(summary.pages, full_pages);
            assert_ne!(canvas.calls.last(), Some(&DrawCall::ShowPage));
            let show_pages = canvas
                .calls
                .iter()
                .filter(|call| **call == DrawCall::ShowPage)
                .count();
            assert_eq!(show_pages, full_pages - 1);
        }
    }

    #[test]
    fn same_input_same_drawing() {
        let mut first = RecordingCanvas::default();
        let mut second = RecordingCanvas::default();
        let renderer = renderer(two_by_three());
        render_labels(&mut first, &renderer, &records(9));
        render_labels(&mut second, &renderer, &records(9));
        assert_eq!(first.calls, second.calls);
    }

    #[test]
    fn overflowing_labels_are_reported() {
        let squat = GridGeometry {
            label_height: Pt(20.0),
            ..two_by_three()
        };
        let mut canvas = RecordingCanvas::default();
        let summary = render_labels(&mut canvas, &renderer(squat), &records(2));
        assert_eq!(summary.overflowing, vec![0, 1]);
        assert_eq!(summary.labels, 2);
    }
}
