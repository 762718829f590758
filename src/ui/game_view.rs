use crate::game::{CellId, GameState, PocketId, Side};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn side_color(side: Side) -> Color {
    match side {
        Side::Left => Color::Red,
        Side::Right => Color::Yellow,
    }
}

pub fn render(
    frame: &mut Frame,
    game: &GameState,
    names: (&str, &str),
    input: &str,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(7),    // Board
            Constraint::Length(3), // Input
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game, names, chunks[0]);
    render_board(frame, game, input, chunks[1]);
    render_input(frame, game, names, input, chunks[2]);
    render_message(frame, message, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn render_header(
    frame: &mut Frame,
    game: &GameState,
    names: (&str, &str),
    area: ratatui::layout::Rect,
) {
    let current = game.current_player();
    let (status, color) = if game.is_terminal() {
        ("Game Over".to_string(), Color::Cyan)
    } else {
        let name = match current {
            crate::game::Player::One => names.0,
            crate::game::Player::Two => names.1,
        };
        (
            format!("Current Player: {name}"),
            side_color(current.side()),
        )
    };

    let scores = format!(
        "  |  1S: {}   2S: {}",
        game.board().store(Side::Left),
        game.board().store(Side::Right)
    );

    let header = Paragraph::new(status + &scores)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Mancala"));

    frame.render_widget(header, area);
}

/// Which pocket the current input buffer names, if any; that pocket is
/// highlighted while the player types.
fn typed_pocket(input: &str) -> Option<PocketId> {
    match input.parse::<CellId>() {
        Ok(CellId::Pocket(p)) => Some(p),
        _ => None,
    }
}

fn render_board(frame: &mut Frame, game: &GameState, input: &str, area: ratatui::layout::Rect) {
    let board = game.board();
    let selected = typed_pocket(input);
    let mut lines = Vec::new();

    // The top row shows the left pockets 1L..6L, the bottom row the right
    // pockets 6R..1R, with each player's store boxed at their end.
    lines.push(pocket_labels(Side::Left, selected));

    let mut top = vec![Span::raw("\u{2554}\u{2550}\u{2550}\u{2550}\u{2550}\u{2557} ")];
    for pos in 1..=6u8 {
        top.push(pocket_span(board, Side::Left, pos, selected));
    }
    top.push(Span::raw("\u{2554}\u{2550}\u{2550}\u{2550}\u{2550}\u{2557}"));
    lines.push(Line::from(top));

    let middle = vec![
        Span::styled(
            format!("\u{2551} {} \u{2551}", board.cell(CellId::Store(Side::Left))),
            Style::default().fg(side_color(Side::Left)),
        ),
        Span::raw(" ".repeat(31)),
        Span::styled(
            format!("\u{2551} {} \u{2551}", board.cell(CellId::Store(Side::Right))),
            Style::default().fg(side_color(Side::Right)),
        ),
    ];
    lines.push(Line::from(middle));

    let mut bottom = vec![Span::raw("\u{255a}\u{2550}\u{2550}\u{2550}\u{2550}\u{255d} ")];
    for pos in (1..=6u8).rev() {
        bottom.push(pocket_span(board, Side::Right, pos, selected));
    }
    bottom.push(Span::raw("\u{255a}\u{2550}\u{2550}\u{2550}\u{2550}\u{255d}"));
    lines.push(Line::from(bottom));

    lines.push(pocket_labels(Side::Right, selected));

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn pocket_span(
    board: &crate::game::Board,
    side: Side,
    pos: u8,
    selected: Option<PocketId>,
) -> Span<'static> {
    let id = PocketId::new(side, pos).expect("render position is 1-6");
    let mut style = Style::default().fg(side_color(side));
    if selected == Some(id) {
        style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
    }
    Span::styled(format!("[{}] ", board.cell(CellId::Pocket(id))), style)
}

fn pocket_labels(side: Side, selected: Option<PocketId>) -> Line<'static> {
    let mut spans = vec![Span::raw("       ")];
    let positions: Vec<u8> = match side {
        Side::Left => (1..=6).collect(),
        Side::Right => (1..=6).rev().collect(),
    };
    for pos in positions {
        let id = PocketId::new(side, pos).expect("label position is 1-6");
        let style = if selected == Some(id) {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {id}  "), style));
    }
    Line::from(spans)
}

fn render_input(
    frame: &mut Frame,
    game: &GameState,
    names: (&str, &str),
    input: &str,
    area: ratatui::layout::Rect,
) {
    let name = match game.current_player() {
        crate::game::Player::One => names.0,
        crate::game::Player::Two => names.1,
    };
    let text = Line::from(vec![
        Span::raw("> "),
        Span::styled(
            input.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled("_", Style::default().fg(Color::DarkGray)),
    ]);

    let widget = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{name}'s move")),
    );
    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = Line::from("1-6 + L/R: pick pocket  |  Enter: sow  |  ?: rules  |  N: new game  |  Q: quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

/// Full-frame rules overlay, shown while '?' is toggled on.
pub fn render_rules(frame: &mut Frame) {
    let lines: Vec<Line> = [
        "",
        "Play always moves around the board counter-clockwise.",
        "The store on your end belongs to you; stones you win stay there.",
        "Stones are never sown into your opponent's store.",
        "Sowing drops one stone into each cell after the chosen pocket",
        "until none remain in your hand.",
        "",
        "Land your last stone in your own store to earn a free turn.",
        "Land it alone in one of your empty pockets to steal that stone",
        "plus everything in the pocket directly opposite.",
        "",
        "The game ends when either row is empty; the fuller store wins.",
    ]
    .into_iter()
    .map(Line::from)
    .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Rules  (press ? to close)"));
    frame.render_widget(widget, frame.area());
}
