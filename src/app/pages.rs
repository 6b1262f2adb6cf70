use crate::core::catalog::{CatalogState, CatalogUpdates};
use crate::core::counter::Button;
use crate::core::directory::{DirectoryLoader, DirectorySession, SearchQuery};
use crate::core::Transport;
use crate::utils::error::{BadgerError, Result};
use crate::view::catalog::render_catalog;
use crate::view::directory::render_directory_page;
use crate::view::outline;
use crate::view::Element;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

impl OutputFormat {
    pub fn render(self, root: &Element) -> String {
        match self {
            OutputFormat::Text => outline::to_text(root),
            OutputFormat::Html => outline::to_html(root),
        }
    }
}

/// 學生目錄頁：持有 session，搜尋後回傳重新渲染的結果
pub struct DirectoryPage {
    session: DirectorySession,
    format: OutputFormat,
}

impl DirectoryPage {
    pub async fn load<R: Transport + ?Sized>(
        loader: &DirectoryLoader,
        transport: &R,
        format: OutputFormat,
    ) -> Self {
        Self {
            session: loader.load(transport).await,
            format,
        }
    }

    pub fn session(&self) -> &DirectorySession {
        &self.session
    }

    pub fn search(&mut self, query: &SearchQuery) -> String {
        self.session.search(query);
        self.render()
    }

    pub fn render(&self) -> String {
        self.format.render(&render_directory_page(&self.session))
    }
}

/// 商店互動指令；index 從 1 開始，對應畫面上的順序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MartCommand {
    Press { button: Button, index: usize },
    Hover {
        button: Button,
        index: usize,
        hovering: bool,
    },
}

impl FromStr for MartCommand {
    type Err = BadgerError;

    fn from_str(input: &str) -> Result<Self> {
        let invalid = |reason: &str| BadgerError::InvalidCommand {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = input.split_whitespace().collect();
        match parts.as_slice() {
            [sign, index] => Ok(MartCommand::Press {
                button: parse_button(sign).ok_or_else(|| invalid("expected + or -"))?,
                index: parse_index(index).ok_or_else(|| invalid("item number must be 1 or more"))?,
            }),
            ["hover", sign, index, state] => Ok(MartCommand::Hover {
                button: parse_button(sign).ok_or_else(|| invalid("expected + or -"))?,
                index: parse_index(index).ok_or_else(|| invalid("item number must be 1 or more"))?,
                hovering: match *state {
                    "on" => true,
                    "off" => false,
                    _ => return Err(invalid("hover state must be on or off")),
                },
            }),
            _ => Err(invalid("unknown command")),
        }
    }
}

fn parse_button(sign: &str) -> Option<Button> {
    match sign {
        "+" => Some(Button::Increase),
        "-" => Some(Button::Decrease),
        _ => None,
    }
}

fn parse_index(raw: &str) -> Option<usize> {
    raw.parse::<usize>().ok().filter(|index| *index >= 1)
}

impl MartCommand {
    /// 套用到對應的計數器；找不到該商品時回傳 false
    pub fn apply(self, state: &mut CatalogState) -> bool {
        let index = match self {
            MartCommand::Press { index, .. } | MartCommand::Hover { index, .. } => index,
        };
        let Some(counter) = index.checked_sub(1).and_then(|i| state.counter_mut(i)) else {
            return false;
        };

        match self {
            MartCommand::Press { button, .. } => counter.press(button),
            MartCommand::Hover {
                button,
                hovering: true,
                ..
            } => counter.pointer_enter(button),
            MartCommand::Hover { button, .. } => counter.pointer_leave(button),
        }
        true
    }
}

pub fn render_mart(state: &CatalogState, format: OutputFormat) -> String {
    format.render(&render_catalog(state))
}

/// 商店頁面每次有動靜時交給呼叫端呈現的內容
#[derive(Debug)]
pub enum MartFrame<'a> {
    Render(&'a CatalogState),
    UnknownItem(&'a str),
    Invalid(&'a BadgerError),
}

/// 執行商店頁面：抓取結果與使用者指令誰先到就先處理，處理完立即重新渲染
///
/// 沒有輸入時只等兩個請求結束。有輸入時，輸入結束後仍會等還在路上的請求。
pub async fn run_mart_session<I, F>(
    mut updates: CatalogUpdates,
    input: Option<I>,
    mut on_frame: F,
) -> Result<CatalogState>
where
    I: AsyncBufRead + Unpin,
    F: FnMut(MartFrame<'_>),
{
    let mut state = CatalogState::new();
    on_frame(MartFrame::Render(&state));

    let Some(input) = input else {
        updates
            .drive(&mut state, |state| on_frame(MartFrame::Render(state)))
            .await;
        return Ok(state);
    };

    let mut lines = input.lines();
    let mut events_open = true;
    let mut input_open = true;

    while events_open || input_open {
        tokio::select! {
            event = updates.next(), if events_open => match event {
                Some(event) => {
                    state.apply(event);
                    on_frame(MartFrame::Render(&state));
                }
                None => {
                    tracing::debug!("Both catalog requests finished");
                    events_open = false;
                }
            },
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    input_open = false;
                    continue;
                };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match line.parse::<MartCommand>() {
                    Ok(command) if command.apply(&mut state) => {
                        on_frame(MartFrame::Render(&state));
                    }
                    Ok(_) => on_frame(MartFrame::UnknownItem(line)),
                    Err(e) => on_frame(MartFrame::Invalid(&e)),
                }
            }
        }
    }

    Ok(state)
}
