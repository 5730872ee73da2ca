use crate::rect::Rect;
use crate::units::Pt;
use crate::LabelError;

/// Slack allowed when checking that labels fit on the page, so that dimensions which
/// add up to the page size exactly aren't rejected over rounding
const FIT_TOLERANCE: Pt = Pt(0.01);

/// The geometry of a sticker sheet: how big each label is and where the labels sit on
/// the page. All values are in points.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct GridGeometry {
    pub label_width: Pt,
    pub label_height: Pt,
    /// Space between the left edge of the page and the first column
    pub page_margin_left: Pt,
    /// Space between the top edge of the page and the first row
    pub page_margin_top: Pt,
    /// Horizontal space between two neighbouring labels
    pub label_margin_right: Pt,
    /// Vertical space between two neighbouring labels
    pub label_margin_top: Pt,
    /// Width inside a label that text is kept away from
    pub label_padding: Pt,
    pub page_width: Pt,
    pub page_height: Pt,
}

impl GridGeometry {
    /// Lower-left corner of the first label on a page
    pub fn origin(&self) -> (Pt, Pt) {
        (
            self.page_margin_left,
            self.page_height - self.page_margin_top - self.label_height,
        )
    }

    /// The width text wraps at inside a label
    pub fn text_width(&self) -> Pt {
        self.label_width - self.label_padding
    }

    /// Check that at least one label fits on the page and that the cursor can make
    /// progress across the sheet
    pub fn validate(&self) -> Result<(), LabelError> {
        if self.label_width <= Pt(0.0) || self.label_height <= Pt(0.0) {
            return Err(LabelError::InvalidGeometry(format!(
                "labels must have a positive size, not {} x {}",
                self.label_width, self.label_height
            )));
        }
        if self.text_width() <= Pt(0.0) {
            return Err(LabelError::InvalidGeometry(format!(
                "padding of {} leaves no room for text in a label {} wide",
                self.label_padding, self.label_width
            )));
        }
        if self.label_width + self.label_margin_right <= Pt(0.0)
            || self.label_height + self.label_margin_top <= Pt(0.0)
        {
            return Err(LabelError::InvalidGeometry(
                "negative label margins make labels overlap completely".to_string(),
            ));
        }
        let usable_width = self.page_width - self.page_margin_left;
        if self.label_width + self.label_margin_right > usable_width + FIT_TOLERANCE {
            return Err(LabelError::InvalidGeometry(format!(
                "a label {} wide with a {} right margin does not fit in the {} wide usable page",
                self.label_width, self.label_margin_right, usable_width
            )));
        }
        if self.origin().1 < -FIT_TOLERANCE {
            return Err(LabelError::InvalidGeometry(format!(
                "a label {} high below a {} top margin does not fit on a {} high page",
                self.label_height, self.page_margin_top, self.page_height
            )));
        }
        Ok(())
    }

    /// How many labels fit next to each other
    pub fn columns(&self) -> usize {
        if self.label_width + self.label_margin_right <= Pt(0.0) {
            return 1;
        }
        let mut cursor = GridCursor::new(*self);
        let mut columns = 1;
        loop {
            let (next, _) = cursor.advance();
            if next.x <= cursor.x {
                return columns;
            }
            columns += 1;
            cursor = next;
        }
    }

    /// How many rows of labels fit on one page
    pub fn rows(&self) -> usize {
        let origin = self.origin().1;
        let step = self.label_height + self.label_margin_top;
        if step <= Pt(0.0) {
            return 1;
        }
        let mut y = origin;
        let mut rows = 1;
        while y - step >= Pt(0.0) {
            y -= step;
            rows += 1;
        }
        rows
    }

    /// How many labels fit on one page
    pub fn capacity(&self) -> usize {
        self.columns() * self.rows()
    }
}

/// Tracks where the next label goes.
///
/// The cursor holds the lower-left corner of the next cell. It starts in the top-left
/// cell of a page, moves right along a row, drops to the next row when there is no room
/// for another label, and returns to the top-left cell once it runs off the bottom of the
/// page.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridCursor {
    geometry: GridGeometry,
    x: Pt,
    y: Pt,
}

impl GridCursor {
    /// A cursor in the first cell of a page
    pub fn new(geometry: GridGeometry) -> GridCursor {
        let (x, y) = geometry.origin();
        GridCursor { geometry, x, y }
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn position(&self) -> (Pt, Pt) {
        (self.x, self.y)
    }

    pub fn is_at_origin(&self) -> bool {
        self.position() == self.geometry.origin()
    }

    /// The cell the cursor currently points at
    pub fn cell(&self) -> Rect {
        Rect::from_corner(
            self.x,
            self.y,
            self.geometry.label_width,
            self.geometry.label_height,
        )
    }

    /// The cursor for the cell after this one, and whether moving there crossed onto a
    /// new page.
    ///
    /// Crossing a page boundary does not mean a page has to be emitted: if nothing is
    /// placed at the new cursor, the page it points into never exists.
    pub fn advance(&self) -> (GridCursor, bool) {
        let g = &self.geometry;
        let (origin_x, origin_y) = g.origin();

        let mut x = self.x + g.label_width + g.label_margin_right;
        let mut y = self.y;
        let mut page_crossed = false;

        if x > g.page_width - g.label_width {
            x = origin_x;
            y -= g.label_height + g.label_margin_top;
            if y < Pt(0.0) {
                y = origin_y;
                page_crossed = true;
            }
        }

        (
            GridCursor {
                geometry: self.geometry,
                x,
                y,
            },
            page_crossed,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// 2 columns by 3 rows of 100pt square labels on a 200 x 300 page
    fn two_by_three() -> GridGeometry {
        GridGeometry {
            label_width: Pt(100.0),
            label_height: Pt(100.0),
            page_width: Pt(200.0),
            page_height: Pt(300.0),
            ..GridGeometry::default()
        }
    }

    #[test]
    fn starts_top_left() {
        let cursor = GridCursor::new(two_by_three());
        assert_eq!(cursor.position(), (Pt(0.0), Pt(200.0)));
        assert!(cursor.is_at_origin());
        assert_eq!(
            cursor.cell(),
            Rect::from_corner(Pt(0.0), Pt(200.0), Pt(100.0), Pt(100.0))
        );
    }

    #[test]
    fn moves_right_then_down() {
        let cursor = GridCursor::new(two_by_three());
        let (cursor, crossed) = cursor.advance();
        assert_eq!(cursor.position(), (Pt(100.0), Pt(200.0)));
        assert!(!crossed);

        let (cursor, crossed) = cursor.advance();
        assert_eq!(cursor.position(), (Pt(0.0), Pt(100.0)));
        assert!(!crossed);
    }

    #[test]
    fn wraps_to_a_new_page_after_the_last_cell() {
        let mut cursor = GridCursor::new(two_by_three());
        let mut crossings = Vec::new();
        for _ in 0..6 {
            let (next, crossed) = cursor.advance();
            crossings.push(crossed);
            cursor = next;
        }
        assert_eq!(crossings, vec![false, false, false, false, false, true]);
        assert!(cursor.is_at_origin());
    }

    #[test]
    fn margins_shift_the_grid() {
        let geometry = GridGeometry {
            page_margin_left: Pt(10.0),
            page_margin_top: Pt(20.0),
            label_margin_right: Pt(5.0),
            label_margin_top: Pt(4.0),
            label_width: Pt(90.0),
            label_height: Pt(50.0),
            page_width: Pt(200.0),
            page_height: Pt(200.0),
            ..GridGeometry::default()
        };
        let cursor = GridCursor::new(geometry);
        assert_eq!(cursor.position(), (Pt(10.0), Pt(130.0)));

        let (cursor, _) = cursor.advance();
        assert_eq!(cursor.position(), (Pt(105.0), Pt(130.0)));

        let (cursor, _) = cursor.advance();
        assert_eq!(cursor.position(), (Pt(10.0), Pt(76.0)));

        assert_eq!(geometry.columns(), 2);
        assert_eq!(geometry.rows(), 3);
    }

    #[test]
    fn grid_shape_follows_the_cursor() {
        let geometry = two_by_three();
        assert_eq!(geometry.columns(), 2);
        assert_eq!(geometry.rows(), 3);
        assert_eq!(geometry.capacity(), 6);

        let single_column = GridGeometry {
            page_width: Pt(150.0),
            ..geometry
        };
        assert_eq!(single_column.columns(), 1);
    }

    #[test]
    fn text_width_subtracts_padding() {
        let geometry = GridGeometry {
            label_padding: Pt(8.0),
            ..two_by_three()
        };
        assert_eq!(geometry.text_width(), Pt(92.0));
    }

    #[test]
    fn validation() {
        assert!(two_by_three().validate().is_ok());

        let empty = GridGeometry::default();
        assert!(matches!(empty.validate(), Err(LabelError::InvalidGeometry(_))));

        let too_wide = GridGeometry {
            label_width: Pt(250.0),
            ..two_by_three()
        };
        assert!(matches!(too_wide.validate(), Err(LabelError::InvalidGeometry(_))));

        let too_tall = GridGeometry {
            page_margin_top: Pt(250.0),
            ..two_by_three()
        };
        assert!(matches!(too_tall.validate(), Err(LabelError::InvalidGeometry(_))));

        let all_padding = GridGeometry {
            label_padding: Pt(100.0),
            ..two_by_three()
        };
        assert!(matches!(all_padding.validate(), Err(LabelError::InvalidGeometry(_))));
    }
}
