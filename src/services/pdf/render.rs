// src/services/pdf/render.rs
//! Render pass: writes a computed layout out with printpdf.

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::*;

use super::layout::{
    footer_text, DrawOp, FontStyle, Layout, RgbColor, FOOTER, FOOTER_BASELINE_MM,
    FOOTER_SIZE_PT, PAGE_HEIGHT_MM, PAGE_WIDTH_MM,
};
use super::metrics::text_width_mm;
use super::PdfError;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
        }
    }
}

fn fill(color: RgbColor) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(color.0) / 255.0,
        f32::from(color.1) / 255.0,
        f32::from(color.2) / 255.0,
        None,
    ))
}

/// PDF space has its origin at the bottom-left corner
fn flip(y: f32) -> Mm {
    Mm(PAGE_HEIGHT_MM - y)
}

/// Bezier control distance for a quarter circle of unit radius
const KAPPA: f32 = 0.552_284_8;

fn point(x: f32, y: Mm) -> Point {
    Point::new(Mm(x), y)
}

/// Outline of a rounded rectangle, clockwise from the top edge. Each corner
/// is one cubic curve; printpdf joins the corners with straight edges.
fn rounded_rect_points(x: f32, y: f32, width: f32, height: f32, radius: f32) -> Vec<(Point, bool)> {
    let r = radius.min(width / 2.0).min(height / 2.0);
    let k = r * KAPPA;
    let (left, right) = (x, x + width);
    let (top, bottom) = (y, y + height);

    vec![
        // top-right
        (point(right - r, flip(top)), true),
        (point(right - r + k, flip(top)), true),
        (point(right, flip(top + r - k)), true),
        (point(right, flip(top + r)), false),
        // bottom-right
        (point(right, flip(bottom - r)), true),
        (point(right, flip(bottom - r + k)), true),
        (point(right - r + k, flip(bottom)), true),
        (point(right - r, flip(bottom)), false),
        // bottom-left
        (point(left + r, flip(bottom)), true),
        (point(left + r - k, flip(bottom)), true),
        (point(left, flip(bottom - r + k)), true),
        (point(left, flip(bottom - r)), false),
        // top-left
        (point(left, flip(top + r)), true),
        (point(left, flip(top + r - k)), true),
        (point(left + r - k, flip(top)), true),
        (point(left + r, flip(top)), false),
    ]
}

fn filled(ring: Vec<(Point, bool)>) -> Polygon {
    Polygon {
        rings: vec![ring],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    }
}

fn draw(layer: &PdfLayerReference, op: &DrawOp, fonts: &Fonts) {
    match op {
        DrawOp::Rect {
            x,
            y,
            width,
            height,
            color,
        } => {
            layer.set_fill_color(fill(*color));
            layer.add_rect(Rect::new(Mm(*x), flip(y + height), Mm(x + width), flip(*y)));
        }
        DrawOp::RoundedRect {
            x,
            y,
            width,
            height,
            radius,
            color,
        } => {
            layer.set_fill_color(fill(*color));
            layer.add_polygon(filled(rounded_rect_points(*x, *y, *width, *height, *radius)));
        }
        DrawOp::Circle {
            cx,
            cy,
            radius,
            color,
        } => {
            layer.set_fill_color(fill(*color));
            layer.add_polygon(filled(calculate_points_for_circle(
                Mm(*radius),
                Mm(*cx),
                flip(*cy),
            )));
        }
        DrawOp::Text {
            text,
            x,
            y,
            size,
            style,
            color,
        } => {
            if text.is_empty() {
                return;
            }
            layer.set_fill_color(fill(*color));
            layer.use_text(text.as_str(), *size, Mm(*x), flip(*y), fonts.get(*style));
        }
    }
}

/// Serialise `layout` into PDF bytes
pub fn render(layout: &Layout, document_title: &str) -> Result<Vec<u8>, PdfError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        document_title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );

    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| PdfError::Render(e.to_string()))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| PdfError::Render(e.to_string()))?,
    };

    let total = layout.pages.len();
    for (index, page) in layout.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            doc.get_page(page_index).get_layer(layer_index)
        };

        for op in &page.ops {
            draw(&layer, op, &fonts);
        }

        let footer = page
            .footer
            .clone()
            .unwrap_or_else(|| footer_text(index + 1, total));
        let footer_x =
            (PAGE_WIDTH_MM - text_width_mm(&footer, FontStyle::Regular, FOOTER_SIZE_PT)) / 2.0;
        layer.set_fill_color(fill(FOOTER));
        layer.use_text(
            footer.as_str(),
            FOOTER_SIZE_PT,
            Mm(footer_x),
            flip(FOOTER_BASELINE_MM),
            &fonts.regular,
        );
    }

    doc.save_to_bytes()
        .map_err(|e| PdfError::Render(e.to_string()))
}
