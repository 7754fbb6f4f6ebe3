//! An endless story feed backed by a slow, occasionally failing source.
//!
//! Scroll with the arrow keys or j/k. New pages load before you reach the
//! bottom; every seventh page fails once so the retry path can be tried.
//! Press `r` to refresh, `enter` to retry, and `q` to quit.

use bubbletea_pager::prelude::*;
use bubbletea_pager::PageError;
use bubbletea_rs::{quit, Cmd, KeyMsg, Model as BubbleTeaModel, Msg, Program, WindowSizeMsg};
use crossterm::event::KeyCode;
use lipgloss_extras::lipgloss::{Color, Style};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const PAGE_SIZE: usize = 25;
const LAST_PAGE: usize = 20;

struct Story {
    number: usize,
    title: String,
}

impl std::fmt::Display for Story {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>4}  {}", self.number, self.title)
    }
}

/// Pages fail the first time they are requested when `page % 7 == 6`.
fn story_source() -> impl PageSource<Story, usize> {
    let failed_once = Arc::new(Mutex::new(HashSet::new()));
    move |cursor: Option<usize>| {
        let page = cursor.unwrap_or(0);
        let fail = page % 7 == 6
            && failed_once
                .lock()
                .map(|mut seen| seen.insert(page))
                .unwrap_or(false);
        async move {
            tokio::time::sleep(Duration::from_millis(600)).await;
            if fail {
                return Err(PageError::transport("gateway timed out"));
            }
            let start = page * PAGE_SIZE;
            let records = (start..start + PAGE_SIZE)
                .map(|n| Story {
                    number: n + 1,
                    title: format!("Story number {}", n + 1),
                })
                .collect();
            let next = (page < LAST_PAGE).then_some(page + 1);
            Ok(Page::new(records, next))
        }
    }
}

struct App {
    feed: Pager<Story, usize>,
    cursor: usize,
    offset: usize,
    height: usize,
}

impl App {
    fn new(mut feed: Pager<Story, usize>) -> (Self, Option<Cmd>) {
        let cmd = feed.init();
        let app = Self {
            feed,
            cursor: 0,
            offset: 0,
            height: 20,
        };
        (app, cmd)
    }

    // A refresh starts over at the top; a shorter list pulls the cursor in.
    fn settle_cursor(&mut self, generation: u64) {
        if self.feed.generation() != generation {
            self.cursor = 0;
            self.offset = 0;
            return;
        }
        self.cursor = self.cursor.min(self.feed.len().saturating_sub(1));
        self.offset = self.offset.min(self.cursor);
    }

    fn move_cursor(&mut self, down: bool) -> Option<Cmd> {
        if self.feed.is_empty() {
            return None;
        }
        if down {
            self.cursor = (self.cursor + 1).min(self.feed.len() - 1);
        } else {
            self.cursor = self.cursor.saturating_sub(1);
        }
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.height {
            self.offset = self.cursor + 1 - self.height;
        }
        self.feed.notify_visible(self.cursor)
    }
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let mut feed = Pager::new(story_source());
        feed.config.look_ahead = 8;
        Self::new(feed)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            // Title, status, and help lines.
            self.height = (size.height as usize).saturating_sub(4).max(1);
            return None;
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            match key_msg.key {
                KeyCode::Char('q') | KeyCode::Esc => return Some(quit()),
                KeyCode::Down | KeyCode::Char('j') => return self.move_cursor(true),
                KeyCode::Up | KeyCode::Char('k') => return self.move_cursor(false),
                _ => {}
            }
        }
        let generation = self.feed.generation();
        let cmd = self.feed.update(msg);
        self.settle_cursor(generation);
        cmd
    }

    fn view(&self) -> String {
        let title = Style::new()
            .bold(true)
            .foreground(Color::from("#FFFDF5"))
            .background(Color::from("#25A065"))
            .padding(0, 1, 0, 1)
            .render("Infinite Feed");

        let end = (self.offset + self.height).min(self.feed.len());
        let selected = Style::new().foreground(Color::from("#EE6FF8"));
        let rows: Vec<String> = self.feed.items()[self.offset.min(end)..end]
            .iter()
            .enumerate()
            .map(|(i, story)| {
                if self.offset + i == self.cursor {
                    selected.clone().render(&format!("> {}", story))
                } else {
                    format!("  {}", story)
                }
            })
            .collect();

        let mut sections = vec![title];
        if !rows.is_empty() {
            sections.push(rows.join("\n"));
        }
        if end == self.feed.len() {
            let status = self.feed.status_line();
            if !status.is_empty() {
                sections.push(status);
            }
        }
        sections.push(self.feed.help_view());
        sections.join("\n")
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
