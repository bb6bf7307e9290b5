// src/services/pdf/layout.rs
//! Layout pass: turns a blueprint into pages of positioned draw operations.
//!
//! Coordinates are millimetres from the top-left corner of an A4 page; `y`
//! on text is the baseline. The renderer flips them into PDF space.

use crate::analysis::models::BlueprintTemplate;

use super::metrics::{ellipsize, text_width_mm, wrap_text, PT_TO_MM};

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 20.0;
pub const HEADER_BAND_MM: f32 = 40.0;
pub const CONTENT_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
/// Lowest point body content may reach
pub const BODY_BOTTOM_MM: f32 = PAGE_HEIGHT_MM - MARGIN_MM;
/// Footer baseline, inside the bottom margin
pub const FOOTER_BASELINE_MM: f32 = PAGE_HEIGHT_MM - 10.0;
pub const FOOTER_SIZE_PT: f32 = 8.0;

pub const PRODUCT_NAME: &str = "CareerArchitect";
pub const SUBTITLE: &str = "Your Engineering Blueprint";

const TECH_PER_ROW: usize = 3;
const TECH_GAP_MM: f32 = 5.0;
const TECH_BOX_HEIGHT_MM: f32 = 10.0;
const TECH_ROW_ADVANCE_MM: f32 = 12.0;
const CORNER_RADIUS_MM: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor(pub u8, pub u8, pub u8);

pub const ACCENT: RgbColor = RgbColor(99, 102, 241);
pub const WHITE: RgbColor = RgbColor(255, 255, 255);
pub const HEADING: RgbColor = RgbColor(30, 30, 30);
pub const BODY: RgbColor = RgbColor(80, 80, 80);
pub const MUTED: RgbColor = RgbColor(100, 100, 100);
pub const TECH_TEXT: RgbColor = RgbColor(60, 60, 60);
pub const BADGE_FILL: RgbColor = RgbColor(243, 244, 246);
pub const TECH_FILL: RgbColor = RgbColor(249, 250, 251);
pub const FOOTER: RgbColor = RgbColor(150, 150, 150);

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        style: FontStyle,
        color: RgbColor,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: RgbColor,
    },
    RoundedRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        color: RgbColor,
    },
    /// Filled disc around (`cx`, `cy`)
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        color: RgbColor,
    },
}

impl DrawOp {
    /// Lowest point the operation touches
    pub fn bottom(&self) -> f32 {
        match self {
            DrawOp::Text { y, size, .. } => y + descent_mm(*size),
            DrawOp::Rect { y, height, .. } | DrawOp::RoundedRect { y, height, .. } => y + height,
            DrawOp::Circle { cy, radius, .. } => cy + radius,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
    /// Stamped once the page count is known
    pub footer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub pages: Vec<Page>,
}

impl Layout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every text run, page by page, footers excluded
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flat_map(|page| {
            page.ops.iter().filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
        })
    }
}

pub fn footer_text(page: usize, total: usize) -> String {
    format!("Generated by {} \u{2022} Page {} of {}", PRODUCT_NAME, page, total)
}

fn ascent_mm(size_pt: f32) -> f32 {
    size_pt * 0.72 * PT_TO_MM
}

fn descent_mm(size_pt: f32) -> f32 {
    size_pt * 0.21 * PT_TO_MM
}

/// Base-14 fonts only cover WinAnsi; anything else (emoji included) is
/// replaced so the output never shows missing glyphs.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\t' | '\n' | '\r' => Some(' '),
            c if c.is_control() => None,
            ' '..='~' | '\u{a0}'..='\u{ff}' | '\u{2022}' => Some(c),
            '\u{2013}' | '\u{2014}' => Some('-'),
            '\u{2018}' | '\u{2019}' => Some('\''),
            '\u{201c}' | '\u{201d}' => Some('"'),
            _ => Some('?'),
        })
        .collect()
}

/// Cursor-driven writer; `y` is the top of the next line box
struct Writer {
    pages: Vec<Page>,
    y: f32,
}

impl Writer {
    fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            y: MARGIN_MM,
        }
    }

    fn ops(&mut self) -> &mut Vec<DrawOp> {
        // the page list is never empty
        let last = self.pages.len() - 1;
        &mut self.pages[last].ops
    }

    /// Start a new page unless `height` more millimetres fit on this one
    fn ensure(&mut self, height: f32) {
        if self.y + height > BODY_BOTTOM_MM && self.y > MARGIN_MM {
            self.pages.push(Page::default());
            self.y = MARGIN_MM;
        }
    }

    fn text(&mut self, text: &str, x: f32, baseline: f32, size: f32, style: FontStyle, color: RgbColor) {
        self.ops().push(DrawOp::Text {
            text: text.to_string(),
            x,
            y: baseline,
            size,
            style,
            color,
        });
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: RgbColor) {
        self.ops().push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn rounded_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: RgbColor) {
        self.ops().push(DrawOp::RoundedRect {
            x,
            y,
            width,
            height,
            radius: CORNER_RADIUS_MM,
            color,
        });
    }

    /// Numbered disc whose bounding square has its top-left corner at (`x`, `top`)
    fn badge(&mut self, number: usize, x: f32, top: f32, diameter: f32, size: f32) {
        let radius = diameter / 2.0;
        self.ops().push(DrawOp::Circle {
            cx: x + radius,
            cy: top + radius,
            radius,
            color: ACCENT,
        });
        let label = number.to_string();
        let label_x = x + (diameter - text_width_mm(&label, FontStyle::Bold, size)) / 2.0;
        let baseline = top + radius + ascent_mm(size) / 2.0;
        self.text(&label, label_x, baseline, size, FontStyle::Bold, WHITE);
    }

    /// One line box of `line_height`, with the baseline placed inside it
    fn line(&mut self, text: &str, x: f32, size: f32, style: FontStyle, color: RgbColor, line_height: f32) {
        self.ensure(line_height);
        let baseline = self.y + line_height - descent_mm(size);
        self.text(text, x, baseline, size, style, color);
        self.y += line_height;
    }

    fn gap(&mut self, height: f32) {
        self.y += height;
    }

    /// Heading kept on the same page as the first line that follows it
    fn heading(&mut self, label: &str, keep_with: f32) {
        const SIZE: f32 = 14.0;
        const LINE: f32 = 8.0;
        const AFTER: f32 = 2.0;
        self.ensure(LINE + AFTER + keep_with);
        self.line(label, MARGIN_MM, SIZE, FontStyle::Bold, HEADING, LINE);
        self.gap(AFTER);
    }
}

/// Lay out a blueprint export for `target_role`
pub fn layout(blueprint: &BlueprintTemplate, target_role: &str) -> Layout {
    let mut w = Writer::new();

    header_band(&mut w);
    title_block(&mut w, &sanitize(&blueprint.title), &sanitize(target_role));
    problem_section(&mut w, &sanitize(&blueprint.problem));
    tech_stack_section(&mut w, &blueprint.tech_stack);
    roadmap_section(&mut w, blueprint);
    interview_section(&mut w, &blueprint.interview_questions);

    let mut layout = Layout { pages: w.pages };
    stamp_footers(&mut layout);
    layout
}

/// Second pass: every page gets "Page i of N"
pub fn stamp_footers(layout: &mut Layout) {
    let total = layout.pages.len();
    for (index, page) in layout.pages.iter_mut().enumerate() {
        page.footer = Some(footer_text(index + 1, total));
    }
}

fn header_band(w: &mut Writer) {
    w.rect(0.0, 0.0, PAGE_WIDTH_MM, HEADER_BAND_MM, ACCENT);
    w.text(PRODUCT_NAME, MARGIN_MM, 25.0, 24.0, FontStyle::Bold, WHITE);

    let subtitle_x = PAGE_WIDTH_MM - MARGIN_MM - text_width_mm(SUBTITLE, FontStyle::Regular, 12.0);
    w.text(SUBTITLE, subtitle_x, 25.0, 12.0, FontStyle::Regular, WHITE);

    w.y = HEADER_BAND_MM + 8.0;
}

fn title_block(w: &mut Writer, title: &str, target_role: &str) {
    for line in wrap_text(title, FontStyle::Bold, 18.0, CONTENT_WIDTH_MM) {
        w.line(&line, MARGIN_MM, 18.0, FontStyle::Bold, HEADING, 8.0);
    }
    w.gap(4.0);

    let badge = ellipsize(
        &format!("Target: {}", target_role),
        FontStyle::Regular,
        10.0,
        CONTENT_WIDTH_MM - 6.0,
    );
    let badge_width = (text_width_mm(&badge, FontStyle::Regular, 10.0) + 6.0).max(60.0);
    w.ensure(8.0);
    let top = w.y;
    w.rounded_rect(MARGIN_MM, top, badge_width, 8.0, BADGE_FILL);
    w.text(&badge, MARGIN_MM + 3.0, top + 5.5, 10.0, FontStyle::Regular, MUTED);
    w.gap(16.0);
}

fn problem_section(w: &mut Writer, problem: &str) {
    let lines = wrap_text(problem, FontStyle::Regular, 10.0, CONTENT_WIDTH_MM);
    w.heading("Problem Statement", 5.0);
    for line in lines {
        w.line(&line, MARGIN_MM, 10.0, FontStyle::Regular, BODY, 5.0);
    }
    w.gap(8.0);
}

fn tech_stack_section(w: &mut Writer, tech_stack: &[String]) {
    w.heading("Tech Stack", TECH_ROW_ADVANCE_MM);

    let slot = (CONTENT_WIDTH_MM - TECH_GAP_MM * (TECH_PER_ROW - 1) as f32) / TECH_PER_ROW as f32;
    for row in tech_stack.chunks(TECH_PER_ROW) {
        w.ensure(TECH_ROW_ADVANCE_MM);
        let top = w.y;
        for (col, tech) in row.iter().enumerate() {
            let x = MARGIN_MM + col as f32 * (slot + TECH_GAP_MM);
            let label = ellipsize(&sanitize(tech), FontStyle::Regular, 10.0, slot - 6.0);
            w.rounded_rect(x, top, slot, TECH_BOX_HEIGHT_MM, TECH_FILL);
            w.text(&label, x + 3.0, top + 6.5, 10.0, FontStyle::Regular, TECH_TEXT);
        }
        w.gap(TECH_ROW_ADVANCE_MM);
    }
    w.gap(6.0);
}

fn roadmap_section(w: &mut Writer, blueprint: &BlueprintTemplate) {
    const BADGE: f32 = 8.0;
    const TITLE_X: f32 = MARGIN_MM + 12.0;
    const TITLE_LINE: f32 = 6.0;
    const DURATION_SLOT: f32 = 30.0;
    const TASK_X: f32 = MARGIN_MM + 17.0;
    const TASK_LINE: f32 = 4.5;

    w.heading("Step-by-Step Roadmap", BADGE);

    for (index, phase) in blueprint.phases.iter().enumerate() {
        let title_lines = wrap_text(
            &sanitize(&phase.title),
            FontStyle::Bold,
            12.0,
            CONTENT_WIDTH_MM - 12.0 - DURATION_SLOT,
        );
        let mut title_lines = title_lines.iter();

        // badge row plus the first task line stay together
        w.ensure(BADGE + TASK_LINE);
        let top = w.y;

        w.badge(index + 1, MARGIN_MM, top, BADGE, 8.0);
        if let Some(first) = title_lines.next() {
            w.text(first, TITLE_X, top + 5.5, 12.0, FontStyle::Bold, HEADING);
        }

        let duration = ellipsize(&sanitize(&phase.duration), FontStyle::Regular, 9.0, DURATION_SLOT);
        let duration_x = PAGE_WIDTH_MM - MARGIN_MM - text_width_mm(&duration, FontStyle::Regular, 9.0);
        w.text(&duration, duration_x, top + 5.5, 9.0, FontStyle::Regular, MUTED);

        w.y = top + BADGE;

        // continuation lines break across pages one at a time
        for line in title_lines {
            w.line(line, TITLE_X, 12.0, FontStyle::Bold, HEADING, TITLE_LINE);
        }

        for task in &phase.tasks {
            let lines = wrap_text(&sanitize(task), FontStyle::Regular, 9.0, CONTENT_WIDTH_MM - 20.0);
            for (i, line) in lines.iter().enumerate() {
                w.ensure(TASK_LINE);
                if i == 0 {
                    let baseline = w.y + TASK_LINE - descent_mm(9.0);
                    w.text("\u{2022}", TITLE_X, baseline, 9.0, FontStyle::Regular, BODY);
                }
                w.line(line, TASK_X, 9.0, FontStyle::Regular, BODY, TASK_LINE);
            }
        }
        w.gap(6.0);
    }
}

fn interview_section(w: &mut Writer, questions: &[String]) {
    const BADGE: f32 = 5.0;
    const LINE: f32 = 5.0;

    w.heading("Mock Interview Questions", LINE);

    for (index, question) in questions.iter().enumerate() {
        let lines = wrap_text(&sanitize(question), FontStyle::Regular, 10.0, CONTENT_WIDTH_MM - 15.0);
        for (i, line) in lines.iter().enumerate() {
            w.ensure(LINE.max(BADGE));
            if i == 0 {
                let top = w.y;
                w.badge(index + 1, MARGIN_MM, top, BADGE, 7.0);
            }
            w.line(line, MARGIN_MM + 10.0, 10.0, FontStyle::Regular, TECH_TEXT, LINE);
        }
        w.gap(3.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::BlueprintPhase;

    fn blueprint(phases: usize, questions: usize) -> BlueprintTemplate {
        BlueprintTemplate {
            title: "Build a Scalable E-Commerce Order Processing System".to_string(),
            problem: "Design and implement a microservices-based order processing system \
                      that handles inventory management, payment processing, and order \
                      fulfillment with high availability and fault tolerance."
                .to_string(),
            tech_stack: ["Java", "Spring Boot", "PostgreSQL", "Kafka", "Docker", "Kubernetes"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            phases: (0..phases)
                .map(|i| BlueprintPhase {
                    title: format!("Phase {}: Core Service Implementation", i + 1),
                    tasks: vec![
                        "Set up project structure with a layered architecture and shared conventions".to_string(),
                        "Implement REST endpoints for order creation, lookup and cancellation".to_string(),
                        "Add integration tests against a disposable database container".to_string(),
                    ],
                    duration: "Week 1-2".to_string(),
                })
                .collect(),
            interview_questions: (0..questions)
                .map(|i| {
                    format!(
                        "Question {}: How would you keep order state consistent across services \
                         when a payment call times out after the inventory has been reserved?",
                        i + 1
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn test_page_count_monotonic_in_phases_and_questions() {
        let mut previous = 0;
        for phases in 0..25 {
            let pages = layout(&blueprint(phases, 5), "Backend Developer").page_count();
            assert!(pages >= previous, "phases={} pages={} previous={}", phases, pages, previous);
            previous = pages;
        }

        let mut previous = 0;
        for questions in 0..60 {
            let pages = layout(&blueprint(4, questions), "Backend Developer").page_count();
            assert!(pages >= previous, "questions={} pages={}", questions, pages);
            previous = pages;
        }
        assert!(previous > 1);
    }

    #[test]
    fn test_every_page_has_numbered_footer() {
        let layout = layout(&blueprint(12, 30), "Backend Developer");
        let total = layout.page_count();
        assert!(total > 1);

        for (index, page) in layout.pages.iter().enumerate() {
            assert_eq!(
                page.footer.as_deref(),
                Some(
                    format!("Generated by CareerArchitect \u{2022} Page {} of {}", index + 1, total)
                        .as_str()
                )
            );
        }
    }

    #[test]
    fn test_body_never_crosses_bottom_margin() {
        for (phases, questions) in [(4, 5), (10, 10), (20, 40)] {
            let layout = layout(&blueprint(phases, questions), "Backend Developer");
            for page in &layout.pages {
                for op in &page.ops {
                    assert!(op.bottom() <= BODY_BOTTOM_MM + 1e-3, "op below margin: {:?}", op);
                }
            }
        }
    }

    #[test]
    fn test_body_text_stays_inside_horizontal_margins() {
        let layout = layout(&blueprint(6, 8), "Backend Developer");
        for page in &layout.pages {
            for op in &page.ops {
                if let DrawOp::Text { text, x, size, style, .. } = op {
                    let right = x + text_width_mm(text, *style, *size);
                    assert!(right <= PAGE_WIDTH_MM - MARGIN_MM + 1e-3, "overflow: {}", text);
                }
            }
        }
    }

    #[test]
    fn test_sections_and_content_are_present() {
        let layout = layout(&blueprint(4, 5), "Data Engineer");
        let texts: Vec<&str> = layout.texts().collect();

        for expected in [
            "CareerArchitect",
            "Your Engineering Blueprint",
            "Target: Data Engineer",
            "Problem Statement",
            "Tech Stack",
            "Step-by-Step Roadmap",
            "Mock Interview Questions",
            "Spring Boot",
            "Week 1-2",
        ] {
            assert!(texts.contains(&expected), "missing {}", expected);
        }
        // header band only on the first page
        let header_count = layout
            .pages
            .iter()
            .filter(|p| p.ops.iter().any(|op| matches!(op, DrawOp::Text { text, .. } if text == PRODUCT_NAME)))
            .count();
        assert_eq!(header_count, 1);
    }

    #[test]
    fn test_oversized_phase_title_breaks_across_pages() {
        let mut oversized = blueprint(2, 2);
        oversized.phases[0].title = "Distributed ".repeat(300);

        let layout = layout(&oversized, "Backend Developer");
        assert!(layout.page_count() > 1);
        for page in &layout.pages {
            for op in &page.ops {
                assert!(op.bottom() <= BODY_BOTTOM_MM + 1e-3, "op below margin: {:?}", op);
            }
        }

        let title_lines = layout.texts().filter(|t| t.starts_with("Distributed")).count();
        assert!(title_lines > 40, "title lines: {}", title_lines);
    }

    #[test]
    fn test_badges_are_circles_and_boxes_are_rounded() {
        let layout = layout(&blueprint(4, 5), "Data Engineer");
        let ops: Vec<&DrawOp> = layout.pages.iter().flat_map(|p| p.ops.iter()).collect();

        let radii: Vec<f32> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle { radius, color, .. } if *color == ACCENT => Some(*radius),
                _ => None,
            })
            .collect();
        // four phase badges then five question badges
        assert_eq!(radii.len(), 9);
        assert!(radii[..4].iter().all(|r| (r - 4.0).abs() < 1e-3));
        assert!(radii[4..].iter().all(|r| (r - 2.5).abs() < 1e-3));

        let rounded = ops
            .iter()
            .filter(|op| matches!(op, DrawOp::RoundedRect { radius, .. } if *radius > 0.0))
            .count();
        // target badge plus six tech boxes
        assert_eq!(rounded, 7);

        // the header band is the only square-cornered shape
        let square = ops.iter().filter(|op| matches!(op, DrawOp::Rect { .. })).count();
        assert_eq!(square, 1);
    }

    #[test]
    fn test_badge_numbers_sit_inside_their_circle() {
        let layout = layout(&blueprint(3, 0), "Data Engineer");
        let ops = &layout.pages[0].ops;

        for (i, op) in ops.iter().enumerate() {
            if let DrawOp::Circle { cx, cy, radius, .. } = op {
                match &ops[i + 1] {
                    DrawOp::Text { text, x, y, size, style, color } => {
                        assert_eq!(*color, WHITE);
                        let width = text_width_mm(text, *style, *size);
                        assert!(*x >= cx - radius && x + width <= cx + radius, "{}", text);
                        assert!(*y > cy - radius && *y < cy + radius, "{}", text);
                    }
                    other => panic!("badge without number: {:?}", other),
                }
            }
        }
    }

    #[test]
    fn test_empty_blueprint_is_one_page() {
        let empty = BlueprintTemplate {
            title: String::new(),
            problem: String::new(),
            tech_stack: vec![],
            phases: vec![],
            interview_questions: vec![],
        };
        let layout = layout(&empty, "");
        assert_eq!(layout.page_count(), 1);
        assert_eq!(layout.pages[0].footer.as_deref(), Some("Generated by CareerArchitect \u{2022} Page 1 of 1"));
    }

    #[test]
    fn test_sanitize_replaces_unsupported_glyphs() {
        assert_eq!(sanitize("\u{1f3af} Goals\tand caf\u{e9}"), "? Goals and caf\u{e9}");
        assert_eq!(sanitize("Week 1\u{2013}2"), "Week 1-2");
    }
}
