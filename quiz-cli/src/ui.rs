//! Terminal UI rendering for the quiz runner.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use quiz_core::{OptionAnnotation, Phase, QuestionReview, QuestionStatus};

use crate::app::QuizApp;

pub fn draw(frame: &mut Frame, app: &QuizApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Question area
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_title_bar(frame, app, chunks[0]);
    draw_question(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);
}

fn draw_title_bar(frame: &mut Frame, app: &QuizApp, area: Rect) {
    let count = app.question_count();
    let position = if count > 0 { app.current_question + 1 } else { 0 };

    let progress = match (app.phase(), app.session.as_ref()) {
        (Some(Phase::Reviewing), Some(session)) => {
            let score = session.score().map(|s| s.to_string()).unwrap_or_default();
            format!(" review - score {}", score)
        }
        (_, Some(session)) => {
            format!(" {}/{} answered", session.answers().answered_count(), count)
        }
        _ => String::new(),
    };

    let title_text = format!(" {} [{}/{}]{}", app.title(), position, count, progress);
    let title_bar = Paragraph::new(title_text)
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));

    frame.render_widget(title_bar, area);
}

fn draw_question(frame: &mut Frame, app: &QuizApp, area: Rect) {
    let (session, question) = match (app.session.as_ref(), app.current()) {
        (Some(s), Some(q)) => (s, q),
        _ => {
            let empty = Paragraph::new("No quiz loaded. Pass a quiz JSON file as argument.")
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(empty, area);
            return;
        }
    };

    let reviewing = session.phase() == Phase::Reviewing;
    let review = reviewing.then(|| session.review());
    let question_review = review.as_ref().map(|r| &r[&question.id]);

    let mut lines: Vec<Line> = Vec::new();

    let mut header = vec![Span::styled(
        format!("{}. {}", app.current_question + 1, question.text),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if let Some(qr) = question_review {
        header.push(Span::styled(
            format!(" {}", qr.status.marker()),
            Style::default().fg(status_color(qr.status)),
        ));
    }
    lines.push(Line::from(header));

    if question.multiple_correct && !reviewing {
        lines.push(Line::from(Span::styled(
            "   Select all that apply (multiple correct answers)",
            Style::default().fg(Color::Cyan),
        )));
    }
    lines.push(Line::from(""));

    for (index, option) in question.options.iter().enumerate() {
        push_option_lines(
            &mut lines,
            app,
            session,
            question,
            question_review,
            index,
            option,
        );
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(if reviewing { " Review " } else { " Quiz " });
    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

#[allow(clippy::too_many_arguments)]
fn push_option_lines(
    lines: &mut Vec<Line>,
    app: &QuizApp,
    session: &quiz_core::QuizSession,
    question: &quiz_core::Question,
    question_review: Option<&QuestionReview>,
    index: usize,
    option: &quiz_core::AnswerOption,
) {
    let selected = session.answers().is_selected(question.id, index);
    let under_cursor = index == app.current_option;

    let marker = match (question.multiple_correct, selected) {
        (true, true) => "[x]",
        (true, false) => "[ ]",
        (false, true) => "(•)",
        (false, false) => "( )",
    };
    let cursor = if under_cursor { ">" } else { " " };

    let option_review = question_review.map(|qr| &qr.options[index]);
    let style = match option_review.map(|o| o.annotation) {
        Some(OptionAnnotation::CorrectChosen) | Some(OptionAnnotation::CorrectUnchosen) => {
            Style::default().fg(Color::Green)
        }
        Some(OptionAnnotation::IncorrectChosen) => Style::default().fg(Color::Red),
        Some(OptionAnnotation::Neutral) => Style::default().fg(Color::Gray),
        None if selected => Style::default().fg(Color::Blue),
        None if under_cursor => Style::default().add_modifier(Modifier::BOLD),
        None => Style::default(),
    };

    let suffix = match option_review.map(|o| o.annotation) {
        Some(OptionAnnotation::CorrectChosen) => " ✓",
        Some(OptionAnnotation::CorrectUnchosen) => " ✓ (correct answer)",
        Some(OptionAnnotation::IncorrectChosen) => " ✗",
        _ => "",
    };

    lines.push(Line::from(Span::styled(
        format!(" {} {} {}{}", cursor, marker, option.text, suffix),
        style,
    )));

    if option_review.map(|o| o.show_explanation).unwrap_or(false) {
        if let Some(explanation) = &option.explanation {
            lines.push(Line::from(Span::styled(
                format!("        {}", explanation),
                Style::default().fg(Color::Yellow),
            )));
        }
    }
}

fn status_color(status: QuestionStatus) -> Color {
    match status {
        QuestionStatus::FullyCorrect => Color::Green,
        QuestionStatus::PartiallyCorrect => Color::Yellow,
        QuestionStatus::Incorrect => Color::Red,
        QuestionStatus::Unanswered => Color::Gray,
    }
}

fn draw_status_bar(frame: &mut Frame, app: &QuizApp, area: Rect) {
    let text = if let Some(msg) = &app.status_message {
        msg.clone()
    } else {
        match app.phase() {
            Some(Phase::Taking) => {
                " j/k: option  h/l: question  space: select  s: submit  q: quit".to_string()
            }
            Some(Phase::Reviewing) => {
                " h/l: question  e: export report  r: retake  q: quit".to_string()
            }
            None => " q: quit".to_string(),
        }
    };

    let status_bar = Paragraph::new(text)
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));
    frame.render_widget(status_bar, area);
}
