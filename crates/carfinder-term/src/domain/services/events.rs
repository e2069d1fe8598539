use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;

use crate::domain::models::Event;

/// Maps one terminal event onto the finder's input vocabulary.
pub fn map_crossterm_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(keyevent) => return map_key_event(keyevent),
        CrosstermEvent::Mouse(mouseevent) => match mouseevent.kind {
            crossterm::event::MouseEventKind::ScrollUp => return Some(Event::KeyboardUp),
            crossterm::event::MouseEventKind::ScrollDown => return Some(Event::KeyboardDown),
            _ => return None,
        },
        _ => return None,
    }
}

fn map_key_event(keyevent: KeyEvent) -> Option<Event> {
    if keyevent.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = keyevent.modifiers.contains(KeyModifiers::CONTROL);
    match keyevent.code {
        KeyCode::Char('c') if ctrl => return Some(Event::KeyboardCTRLC),
        KeyCode::Char('q') => return Some(Event::KeyboardQuit),
        KeyCode::Char('b') | KeyCode::Esc | KeyCode::Backspace => {
            return Some(Event::KeyboardBack);
        }
        KeyCode::Char('k') | KeyCode::Up => return Some(Event::KeyboardUp),
        KeyCode::Char('j') | KeyCode::Down => return Some(Event::KeyboardDown),
        KeyCode::Char('h') | KeyCode::Left => return Some(Event::KeyboardLeft),
        KeyCode::Char('l') | KeyCode::Right => return Some(Event::KeyboardRight),
        KeyCode::Tab => return Some(Event::KeyboardTab),
        KeyCode::BackTab => return Some(Event::KeyboardBackTab),
        KeyCode::Enter => return Some(Event::KeyboardEnter),
        _ => return None,
    }
}

pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
            events,
        };
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => event,
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => map_crossterm_event(input),
                    Some(Err(_)) => None,
                    None => None
                },
                _ = time::sleep(time::Duration::from_millis(500)) => Some(Event::UITick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
