use std::path::Path;

use ab_glyph::PxScale;
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use wordfreq_core::frequency::FrequencyTable;

use crate::text::{draw_centered, draw_vertical, fit_label, load_font, text_width};
use crate::{ExportError, ensure_parent};

const MARGIN_LEFT: u32 = 90;
const MARGIN_RIGHT: u32 = 30;
const MARGIN_TOP: u32 = 70;
const MARGIN_BOTTOM: u32 = 90;
const MIN_PLOT_HEIGHT: u32 = 20;
const MAX_TICKS: usize = 8;
// Fraction of each slot a bar occupies
const BAR_FILL: f64 = 0.8;

const TITLE_SCALE: PxScale = PxScale { x: 28.0, y: 28.0 };
const TEXT_SCALE: PxScale = PxScale { x: 16.0, y: 16.0 };
// Horizontal gap kept between neighbouring labels
const LABEL_GAP: u32 = 4;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const FOREGROUND: Rgb<u8> = Rgb([0, 0, 0]);
const BAR_COLOR: Rgb<u8> = Rgb([31, 119, 180]);

#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub top_n: usize,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            top_n: 10,
            width: 1200,
            height: 600,
        }
    }
}

impl ChartOptions {
    pub fn with_top_n(top_n: usize) -> Self {
        Self {
            top_n,
            ..Self::default()
        }
    }
}

/// One bar in image coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub word: String,
    /// What gets drawn under the bar: the word, ellipsized if it overflows its slot
    pub label: String,
    pub count: usize,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Geometry of a chart, computed before any pixel is drawn
#[derive(Debug, Clone)]
pub struct ChartLayout {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub plot_left: u32,
    pub plot_top: u32,
    pub plot_right: u32,
    pub plot_bottom: u32,
    /// Value at the top of the y axis
    pub y_max: usize,
    /// (value, y pixel) for every labelled tick
    pub ticks: Vec<(usize, u32)>,
    pub bars: Vec<Bar>,
}

/// Smallest 1/2/5 x 10^k step that keeps the axis at or under MAX_TICKS intervals
fn tick_step(max_count: usize) -> usize {
    let mut magnitude = 1;
    loop {
        for factor in [1, 2, 5] {
            let step = factor * magnitude;
            if max_count.div_ceil(step) <= MAX_TICKS {
                return step;
            }
        }
        magnitude *= 10;
    }
}

impl ChartLayout {
    /// Lay out the first `top_n` rows as vertical bars. Rejects `top_n == 0`.
    pub fn compute(table: &FrequencyTable, options: &ChartOptions) -> Result<Self, ExportError> {
        if options.top_n == 0 {
            return Err(ExportError::InvalidTopN(options.top_n));
        }

        let rows = table.top(options.top_n);
        if options.width < MARGIN_LEFT + MARGIN_RIGHT + rows.len() as u32
            || options.height < MARGIN_TOP + MARGIN_BOTTOM + MIN_PLOT_HEIGHT
        {
            return Err(ExportError::ChartTooSmall {
                width: options.width,
                height: options.height,
                bars: rows.len(),
            });
        }

        let plot_left = MARGIN_LEFT;
        let plot_top = MARGIN_TOP;
        let plot_right = options.width - MARGIN_RIGHT;
        let plot_bottom = options.height - MARGIN_BOTTOM;
        let plot_width = plot_right - plot_left;
        let plot_height = plot_bottom - plot_top;

        let max_count = rows.iter().map(|row| row.count).max().unwrap_or(0);
        let step = tick_step(max_count);
        let y_max = max_count.div_ceil(step).max(1) * step;

        let scale_y = |value: usize| -> u32 {
            (value as f64 / y_max as f64 * plot_height as f64).round() as u32
        };

        let ticks = (0..=y_max)
            .step_by(step)
            .map(|value| (value, plot_bottom - scale_y(value)))
            .collect();

        let mut bars = Vec::with_capacity(rows.len());
        if !rows.is_empty() {
            let font = load_font()?;
            let slot = plot_width as f64 / rows.len() as f64;
            let bar_width = (slot * BAR_FILL).max(1.0);
            let label_width = (slot as u32).saturating_sub(LABEL_GAP).max(1);

            for (i, row) in rows.iter().enumerate() {
                let x = plot_left + (i as f64 * slot + (slot - bar_width) / 2.0).round() as u32;
                let height = scale_y(row.count).clamp(1, plot_height);
                bars.push(Bar {
                    word: row.word.clone(),
                    label: fit_label(&font, TEXT_SCALE, &row.word, label_width),
                    count: row.count,
                    x,
                    y: plot_bottom - height,
                    width: bar_width.round() as u32,
                    height,
                });
            }
        }

        Ok(Self {
            width: options.width,
            height: options.height,
            title: format!("Top {} Most Frequent Words", options.top_n),
            plot_left,
            plot_top,
            plot_right,
            plot_bottom,
            y_max,
            ticks,
            bars,
        })
    }
}

fn fill_rect(image: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, color: Rgb<u8>) {
    if width == 0 || height == 0 {
        return;
    }
    draw_filled_rect_mut(image, Rect::at(x as i32, y as i32).of_size(width, height), color);
}

/// Rasterize a layout
pub fn render(layout: &ChartLayout) -> Result<RgbImage, ExportError> {
    let font = load_font()?;
    let mut image = RgbImage::from_pixel(layout.width, layout.height, BACKGROUND);
    let center_x = layout.width / 2;

    draw_centered(&mut image, &font, &layout.title, center_x, 20, TITLE_SCALE, FOREGROUND);

    for bar in &layout.bars {
        fill_rect(&mut image, bar.x, bar.y, bar.width, bar.height, BAR_COLOR);
        draw_centered(
            &mut image,
            &font,
            &bar.label,
            bar.x + bar.width / 2,
            layout.plot_bottom + 10,
            TEXT_SCALE,
            FOREGROUND,
        );
    }

    // Axes
    let axis_height = layout.plot_bottom - layout.plot_top + 2;
    fill_rect(&mut image, layout.plot_left - 2, layout.plot_top, 2, axis_height, FOREGROUND);
    let axis_width = layout.plot_right - layout.plot_left + 2;
    fill_rect(&mut image, layout.plot_left - 2, layout.plot_bottom, axis_width, 2, FOREGROUND);

    let text_half = (TEXT_SCALE.y / 2.0) as u32;
    for &(value, y) in &layout.ticks {
        fill_rect(&mut image, layout.plot_left - 8, y, 6, 2, FOREGROUND);
        let text = value.to_string();
        let x = (layout.plot_left - 12).saturating_sub(text_width(&font, TEXT_SCALE, &text));
        let y = y.saturating_sub(text_half);
        draw_text_mut(&mut image, FOREGROUND, x as i32, y as i32, TEXT_SCALE, &font, &text);
    }

    let plot_center_x = (layout.plot_left + layout.plot_right) / 2;
    draw_centered(
        &mut image,
        &font,
        "Words",
        plot_center_x,
        layout.height - 36,
        TEXT_SCALE,
        FOREGROUND,
    );

    let plot_center_y = (layout.plot_top + layout.plot_bottom) / 2;
    draw_vertical(
        &mut image,
        &font,
        "Frequency",
        12,
        plot_center_y,
        TEXT_SCALE,
        (FOREGROUND, BACKGROUND),
    );

    Ok(image)
}

/// Bar chart of the first `top_n` rows at the default size
pub fn export_chart(
    table: &FrequencyTable,
    destination: &Path,
    top_n: usize,
) -> Result<(), ExportError> {
    export_chart_with(table, destination, &ChartOptions::with_top_n(top_n))
}

/// Validate, lay out, render and write a PNG. Nothing touches disk if validation fails.
pub fn export_chart_with(
    table: &FrequencyTable,
    destination: &Path,
    options: &ChartOptions,
) -> Result<(), ExportError> {
    let layout = ChartLayout::compute(table, options)?;
    let image = render(&layout)?;

    ensure_parent(destination)?;
    image.save_with_format(destination, ImageFormat::Png)?;

    tracing::info!(
        "Wrote chart with {} bars to {}",
        layout.bars.len(),
        destination.display()
    );
    Ok(())
}
