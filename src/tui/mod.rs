//! Interactive terminal demo.
//!
//! Renders the laid-out cards as bordered blocks. Terminal resizes feed the
//! engine's viewport resize path, so shrinking or widening the terminal
//! re-balances the columns live; digit keys activate the corresponding
//! filter trigger and `*` shows everything again. The loop follows the
//! poll/tick/draw shape: every iteration advances the engine's deferred
//! tasks before drawing, so settle transitions play out on screen.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::constants::{ACTIVE_CLASS, HIDDEN_CLASS, ITEM_CLASS, TRIGGER_FILTER_ATTR};
use crate::document::{Document, NodeId};
use crate::engine::Engine;
use crate::scene::Scene;

/// Horizontal pixels represented by one terminal column.
const PX_PER_COL: f32 = 8.0;

/// Vertical pixels represented by one terminal row.
const PX_PER_ROW: f32 = 10.0;

/// Rows reserved for the header.
const HEADER_ROWS: u16 = 2;

/// Card border palette, picked per category.
const PALETTE: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Red,
];

/// Runs the demo for a scene until the user quits.
pub fn run_demo(scene: &Scene) -> Result<()> {
    let mut doc = scene.build_document();
    let mut engine = Engine::new();
    engine.scan(&mut doc);

    let mut terminal = setup_terminal()?;
    if let Ok(size) = terminal.size() {
        doc.set_viewport_width(f32::from(size.width) * PX_PER_COL);
        engine.handle_resize();
    }

    let result = run_loop(&mut terminal, &mut doc, &mut engine);
    restore_terminal(terminal)?;
    result
}

/// Initialize terminal for the demo
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    doc: &mut Document,
    engine: &mut Engine,
) -> Result<()> {
    loop {
        engine.tick(doc, Instant::now());
        terminal.draw(|f| render(f, doc, engine))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key(doc, engine, key) {
                        break;
                    }
                }
                Event::Resize(width, _) => {
                    doc.set_viewport_width(f32::from(width) * PX_PER_COL);
                    engine.handle_resize();
                }
                _ => {}
            }
        }
    }
    Ok(())
}

/// Handles one key event; returns `true` when the user quits.
fn handle_key(doc: &mut Document, engine: &mut Engine, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('*') => {
            if let Some(trigger) = engine.find_trigger(doc, "*") {
                engine.activate_trigger(doc, trigger, Instant::now());
            }
            false
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            activate_by_index(doc, engine, index);
            false
        }
        _ => false,
    }
}

/// Activates the n-th trigger of the first container that has one.
fn activate_by_index(doc: &mut Document, engine: &mut Engine, index: usize) {
    let trigger = engine.handles().into_iter().find_map(|handle| {
        engine
            .triggers(handle)
            .and_then(|triggers| triggers.get(index).copied())
    });
    if let Some(trigger) = trigger {
        engine.activate_trigger(doc, trigger, Instant::now());
    }
}

/// Render the UI from current state
fn render(f: &mut Frame, doc: &Document, engine: &Engine) {
    let area = f.area();
    render_header(f, area, doc, engine);

    let mut y_offset = HEADER_ROWS;
    for handle in engine.handles() {
        let Some(grid) = engine.grid(handle) else {
            continue;
        };
        render_grid(f, area, doc, grid, y_offset);

        let grid_rows = doc
            .style(grid)
            .height_px
            .map_or(0, |height| (height / PX_PER_ROW).ceil() as u16);
        y_offset = y_offset.saturating_add(grid_rows).saturating_add(1);
    }
}

/// Header: viewport info plus the filter trigger bar.
fn render_header(f: &mut Frame, area: Rect, doc: &Document, engine: &Engine) {
    let mut spans = vec![Span::styled(
        format!("Cardwall — viewport {:.0}px ", doc.viewport_width()),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::raw("| 1-9 filter, * all, q quit  "));

    for handle in engine.handles() {
        let Some(triggers) = engine.triggers(handle) else {
            continue;
        };
        for (index, &trigger) in triggers.iter().enumerate() {
            let tag = doc.attribute(trigger, TRIGGER_FILTER_ATTR).unwrap_or("?");
            let label = format!("[{}:{}] ", index + 1, tag);
            let style = if doc.has_class(trigger, ACTIVE_CLASS) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(label, style));
        }
        break; // header shows the first container's triggers
    }

    let header = Paragraph::new(Line::from(spans));
    let header_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: HEADER_ROWS.min(area.height),
    };
    f.render_widget(header, header_area);
}

/// Draws every displayed card of one grid as a bordered block.
fn render_grid(f: &mut Frame, area: Rect, doc: &Document, grid: NodeId, y_offset: u16) {
    for item in doc.descendants_with_class(grid, ITEM_CLASS) {
        if !doc.is_displayed(item) {
            continue;
        }
        let style = doc.style(item);
        let (Some(left_pct), Some(top_px), Some(width_pct)) =
            (style.left_pct, style.top_px, style.width_pct)
        else {
            continue; // not yet laid out
        };

        let x = area.x + (left_pct / 100.0 * f32::from(area.width)) as u16;
        let y = y_offset.saturating_add((top_px / PX_PER_ROW) as u16);
        let width = ((width_pct / 100.0 * f32::from(area.width)) as u16).max(3);
        let height = ((doc.measured_height(item) / PX_PER_ROW) as u16).max(2);
        if y >= area.height || x >= area.width {
            continue;
        }

        let rect = Rect {
            x,
            y,
            width: width.min(area.width - x),
            height: height.min(area.height - y),
        };
        let label = card_label(doc, item);
        let color = PALETTE[color_index(&label)];
        let block = Block::default()
            .borders(Borders::ALL)
            .title(label)
            .style(Style::default().fg(color));
        f.render_widget(block, rect);
    }
}

/// First category tag of a card, for the block title.
fn card_label(doc: &Document, item: NodeId) -> String {
    doc.classes(item)
        .iter()
        .find(|class| {
            class.as_str() != ITEM_CLASS
                && class.as_str() != ACTIVE_CLASS
                && class.as_str() != HIDDEN_CLASS
        })
        .cloned()
        .unwrap_or_default()
}

/// Stable palette pick for a label.
fn color_index(label: &str) -> usize {
    label.bytes().map(usize::from).sum::<usize>() % PALETTE.len()
}
