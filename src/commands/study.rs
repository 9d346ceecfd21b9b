use std::io;
use std::time::Duration;

use crate::card::{SENTENCE_KIND, VOCABULARY_KIND, kind_label};
use crate::loader::LoadedDeck;
use crate::session::{CardView, Session};
use crate::tui::Theme;

use anyhow::{Context, Result};
use crossterm::event::KeyModifiers;
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

const HIDDEN_ANSWER_RULE: &str = "· · ·";

pub fn run(deck: LoadedDeck, default_kind: String) -> Result<()> {
    let mut session = Session::new(deck.cards, default_kind);
    start_study_session(&mut session)
}

fn start_study_session(session: &mut Session) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
                | KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
        )
    )
    .context("failed to configure terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to start terminal")?;
    terminal.hide_cursor().context("failed to hide cursor")?;

    let loop_result = study_loop(&mut terminal, session);

    teardown_terminal(&mut terminal)?;

    loop_result
}

// Each key press maps to exactly one session operation; the next frame
// renders the resulting view. Raw mode keeps the keys from reaching the
// terminal's own handling.
fn study_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut Session,
) -> Result<()> {
    loop {
        let view = session.current_view();
        let kind = session.kind().to_string();

        terminal
            .draw(|frame| {
                let area = frame.area();
                frame.render_widget(Theme::backdrop(), area);
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(5), Constraint::Length(3)])
                    .split(area);

                let card_widget = Paragraph::new(card_text(&view))
                    .block(Theme::panel_with_line(header_line(&kind, &view)))
                    .wrap(Wrap { trim: false });
                frame.render_widget(card_widget, chunks[0]);

                let footer = Paragraph::new(instructions_text(&view))
                    .block(Theme::panel_with_line(Theme::section_header("Controls")));
                frame.render_widget(footer, chunks[1]);
            })
            .context("failed to render frame")?;

        if event::poll(Duration::from_millis(16))?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Esc
                || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
            {
                break Ok(());
            }
            match key.code {
                KeyCode::Char(' ') => session.toggle_reveal(),
                KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('N') => session.advance(),
                KeyCode::Char('s') | KeyCode::Char('S') => session.shuffle(),
                KeyCode::Char('1') => session.apply_filter(SENTENCE_KIND),
                KeyCode::Char('2') => session.apply_filter(VOCABULARY_KIND),
                _ => {}
            }
        }
    }
}

fn teardown_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        PopKeyboardEnhancementFlags,
        LeaveAlternateScreen
    )
    .context("failed to restore terminal")?;
    terminal.show_cursor().context("failed to show cursor")?;
    Ok(())
}

fn header_line(kind: &str, view: &CardView) -> Line<'static> {
    let mut spans = vec![Theme::counter_span(format!("Card {}", view.counter()))];
    spans.push(Theme::bullet());
    spans.extend(selector_spans(kind));
    Line::from(spans)
}

/// Radio-style selector row. The two stock kinds always show; a custom kind
/// picked via --kind gets its own marked entry after them.
fn selector_spans(kind: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for stock in [SENTENCE_KIND, VOCABULARY_KIND] {
        if !spans.is_empty() {
            spans.push(Theme::span("  "));
        }
        spans.push(selector_span(stock, kind == stock));
    }
    if kind != SENTENCE_KIND && kind != VOCABULARY_KIND {
        spans.push(Theme::span("  "));
        spans.push(selector_span(kind, true));
    }
    spans
}

fn selector_span(kind: &str, selected: bool) -> Span<'static> {
    let marker = if selected { "(•)" } else { "( )" };
    let style = if selected {
        Theme::selector_on()
    } else {
        Theme::selector_off()
    };
    Span::styled(format!("{marker} {}", kind_label(kind)), style)
}

fn card_text(view: &CardView) -> Vec<Line<'static>> {
    if view.is_empty() {
        return vec![Line::from(Span::styled(
            "No cards available.".to_string(),
            Theme::prompt(),
        ))];
    }

    let answer = if view.revealed {
        Span::styled(view.answer.clone(), Theme::answer_shown())
    } else {
        Span::styled(HIDDEN_ANSWER_RULE.to_string(), Theme::answer_hidden())
    };
    vec![
        Line::from(Span::styled(view.prompt.clone(), Theme::prompt())),
        Line::default(),
        Line::from(answer),
    ]
}

fn instructions_text(view: &CardView) -> Vec<Line<'static>> {
    let reveal_label = if view.revealed {
        " hide answer"
    } else {
        " show answer"
    };
    vec![Line::from(vec![
        Theme::key_chip("Space"),
        Theme::span(reveal_label),
        Theme::bullet(),
        Theme::key_chip("→"),
        Theme::span(" or "),
        Theme::key_chip("N"),
        Theme::span(" next"),
        Theme::bullet(),
        Theme::key_chip("S"),
        Theme::span(" shuffle"),
        Theme::bullet(),
        Theme::key_chip("1"),
        Theme::span("/"),
        Theme::key_chip("2"),
        Theme::span(" card type"),
        Theme::bullet(),
        Theme::key_chip("Esc"),
        Theme::span(" quit"),
    ])]
}
