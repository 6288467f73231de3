//! TUI rendering with ratatui
//!
//! Draws the reveal: the current word as five letter tiles in a fixed-size
//! stage, a row of progress pips and a static hint line. Pure function of the
//! `RevealView`.

use crate::core::WORD_LENGTH;
use crate::reveal::{Phase, ROUND_SIZE, RevealView};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

/// Stage size; the word never moves inside it
pub const STAGE_WIDTH: u16 = 80;
pub const STAGE_HEIGHT: u16 = 12;

const TILE_WIDTH: u16 = 5;
const TILE_HEIGHT: u16 = 3;

/// Shown before the first word is drawn
const PLACEHOLDER: &str = "-----";

pub const HINT: &str = "Enter or scroll → new round   ·   q / Esc → quit";

const STYLE_ROLLING: Style = Style::new()
    .fg(Color::Rgb(0xE8, 0xE8, 0xE8))
    .bg(Color::Rgb(0x1A, 0x1A, 0x2E))
    .add_modifier(Modifier::BOLD);

const STYLE_STOPPED: Style = Style::new()
    .fg(Color::Rgb(0x00, 0xFF, 0x87))
    .bg(Color::Rgb(0x0D, 0x1B, 0x2A))
    .add_modifier(Modifier::BOLD);

const STYLE_HINT: Style = Style::new().fg(Color::Rgb(0x6B, 0x72, 0x80));
const STYLE_STATUS: Style = Style::new().fg(Color::DarkGray);
const STYLE_PIP_DONE: Style = Style::new().fg(Color::Cyan);
const STYLE_PIP_PENDING: Style = Style::new().fg(Color::DarkGray);

/// Main UI rendering function
pub fn ui(f: &mut Frame, view: &RevealView<'_>) {
    let stage = stage_area(f.area());

    let [status, tiles, pips, _, hint] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(TILE_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .spacing(1)
    .areas(stage);

    render_status(f, view, status);
    render_tiles(f, view, tiles);
    render_pips(f, view, pips);

    let hint_line = Paragraph::new(HINT)
        .style(STYLE_HINT)
        .alignment(Alignment::Center);
    f.render_widget(hint_line, hint);
}

/// Fixed-size stage centred in `area`, shrunk if the terminal is smaller
#[must_use]
pub fn stage_area(area: Rect) -> Rect {
    let width = STAGE_WIDTH.min(area.width);
    let height = STAGE_HEIGHT.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

const fn word_style(phase: Phase) -> Style {
    match phase {
        Phase::Rolling => STYLE_ROLLING,
        Phase::Stopped => STYLE_STOPPED,
    }
}

fn render_status(f: &mut Frame, view: &RevealView<'_>, area: Rect) {
    let text = if view.round == 0 {
        "shuffling…".to_string()
    } else {
        format!("ROUND {}  ·  {}", view.round, view.phase)
    };
    let status = Paragraph::new(text)
        .style(STYLE_STATUS)
        .alignment(Alignment::Center);
    f.render_widget(status, area);
}

fn render_tiles(f: &mut Frame, view: &RevealView<'_>, area: Rect) {
    let style = word_style(view.phase);
    let border = match view.phase {
        Phase::Rolling => BorderType::Rounded,
        Phase::Stopped => BorderType::Double,
    };

    let word = view.word.unwrap_or(PLACEHOLDER).to_ascii_uppercase();
    let cells = Layout::horizontal([Constraint::Length(TILE_WIDTH); WORD_LENGTH])
        .flex(Flex::Center)
        .spacing(1)
        .split(area);

    for (letter, cell) in word.chars().zip(cells.iter()) {
        let tile = Paragraph::new(letter.to_string())
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_type(border).border_style(style));
        f.render_widget(tile, *cell);
    }
}

fn render_pips(f: &mut Frame, view: &RevealView<'_>, area: Rect) {
    let shown = match (view.phase, view.step) {
        (Phase::Stopped, _) => ROUND_SIZE,
        (Phase::Rolling, Some(step)) => step + 1,
        (Phase::Rolling, None) => 0,
    };
    let done_style = match view.phase {
        Phase::Rolling => STYLE_PIP_DONE,
        Phase::Stopped => STYLE_STOPPED.bg(Color::Reset),
    };

    let spans: Vec<Span> = (0..ROUND_SIZE)
        .map(|i| {
            if i < shown {
                Span::styled("● ", done_style)
            } else {
                Span::styled("○ ", STYLE_PIP_PENDING)
            }
        })
        .collect();

    let pips = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(pips, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn render(view: &RevealView<'_>, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui(f, view)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn rows(buffer: &Buffer) -> Vec<String> {
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    /// Row index and letters of the tile row
    fn tile_row(buffer: &Buffer) -> Option<(usize, String)> {
        rows(buffer).into_iter().enumerate().find_map(|(y, row)| {
            let letters: String = row.chars().filter(char::is_ascii_uppercase).collect();
            (letters.len() == WORD_LENGTH && !row.contains("ROUND")).then_some((y, letters))
        })
    }

    fn view(word: Option<&str>, phase: Phase, step: Option<usize>) -> RevealView<'_> {
        RevealView {
            word,
            phase,
            step,
            round: 1,
        }
    }

    #[test]
    fn renders_word_uppercase_in_tiles() {
        let buffer = render(&view(Some("crane"), Phase::Rolling, Some(3)), 80, 24);
        let (_, letters) = tile_row(&buffer).expect("tile row");
        assert_eq!(letters, "CRANE");
    }

    #[test]
    fn renders_hint_and_status() {
        let buffer = render(&view(Some("crane"), Phase::Stopped, Some(15)), 80, 24);
        let text = rows(&buffer).join("\n");
        assert!(text.contains("new round"));
        assert!(text.contains("q / Esc"));
        assert!(text.contains("ROUND 1"));
        assert!(text.contains("stopped"));
    }

    #[test]
    fn word_position_is_stable() {
        let a = render(&view(Some("crane"), Phase::Rolling, Some(0)), 80, 24);
        let b = render(&view(Some("witch"), Phase::Rolling, Some(1)), 80, 24);

        let (row_a, _) = tile_row(&a).unwrap();
        let (row_b, _) = tile_row(&b).unwrap();
        assert_eq!(row_a, row_b);

        let first_letter = |buffer: &Buffer, y: usize| {
            (0..buffer.area.width).find(|&x| {
                let symbol = buffer[(x, y as u16)].symbol();
                !symbol.is_empty() && symbol.chars().all(|c| c.is_ascii_uppercase())
            })
        };
        assert_eq!(first_letter(&a, row_a), first_letter(&b, row_b));
    }

    #[test]
    fn rolling_and_stopped_styles_differ() {
        let rolling = render(&view(Some("crane"), Phase::Rolling, Some(5)), 80, 24);
        let stopped = render(&view(Some("crane"), Phase::Stopped, Some(15)), 80, 24);

        let letter_fg = |buffer: &Buffer| {
            let (y, _) = tile_row(buffer).unwrap();
            let x = (0..buffer.area.width)
                .find(|&x| buffer[(x, y as u16)].symbol() == "C")
                .unwrap();
            buffer[(x, y as u16)].fg
        };
        assert_eq!(letter_fg(&rolling), Color::Rgb(0xE8, 0xE8, 0xE8));
        assert_eq!(letter_fg(&stopped), Color::Rgb(0x00, 0xFF, 0x87));
    }

    #[test]
    fn placeholder_before_first_round() {
        let empty = RevealView {
            word: None,
            phase: Phase::Rolling,
            step: None,
            round: 0,
        };
        let text = rows(&render(&empty, 80, 24)).join("\n");
        assert!(text.contains('-'));
        assert!(text.contains("shuffling"));
    }

    #[test]
    fn pips_track_step() {
        let buffer = render(&view(Some("crane"), Phase::Rolling, Some(4)), 80, 24);
        let text = rows(&buffer).join("\n");
        assert_eq!(text.matches('●').count(), 5);
        assert_eq!(text.matches('○').count(), ROUND_SIZE - 5);

        let stopped = render(&view(Some("crane"), Phase::Stopped, Some(15)), 80, 24);
        let text = rows(&stopped).join("\n");
        assert_eq!(text.matches('●').count(), ROUND_SIZE);
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let _ = render(&view(Some("crane"), Phase::Rolling, Some(0)), 10, 4);
    }

    #[test]
    fn stage_is_centred_and_clamped() {
        let stage = stage_area(Rect::new(0, 0, 120, 40));
        assert_eq!(stage, Rect::new(20, 14, STAGE_WIDTH, STAGE_HEIGHT));

        let small = stage_area(Rect::new(0, 0, 40, 6));
        assert_eq!(small, Rect::new(0, 0, 40, 6));
    }
}
