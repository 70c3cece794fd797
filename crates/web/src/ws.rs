//! WebSocket relay: seats two players, revalidates their moves against the
//! authoritative game, and fans state out to everyone connected.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use tokio::sync::broadcast;
use tracing::{debug, info};

use chess_duel_core::protocol::{ClientMessage, GameStateView, ServerMessage};
use chess_duel_core::{Color, Square};

use crate::AppState;

/// Seat occupancy: the first connection plays white, the second black, and
/// the rest are turned away.
#[derive(Debug, Default)]
pub struct Seats {
    white: bool,
    black: bool,
}

impl Seats {
    pub fn claim(&mut self) -> Option<Color> {
        if !self.white {
            self.white = true;
            Some(Color::White)
        } else if !self.black {
            self.black = true;
            Some(Color::Black)
        } else {
            None
        }
    }

    pub fn release(&mut self, color: Color) {
        match color {
            Color::White => self.white = false,
            Color::Black => self.black = false,
        }
    }
}

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

pub async fn health() -> &'static str {
    "OK"
}

async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    info!("new client connected");

    let seat = state.seats.lock().unwrap().claim();
    let Some(player) = seat else {
        info!("game full, rejecting additional client");
        let full = ServerMessage::GameFull {
            message: "Game is full. Only 2 players allowed.".to_string(),
        };
        let _ = socket.send(Message::Text(encode(&full))).await;
        let _ = socket.send(Message::Close(None)).await;
        return;
    };

    // Subscribe before announcing the seat so this client also sees its own
    // playerJoined.
    let mut rx = state.tx.subscribe();

    let assigned = {
        let game = state.game.lock().unwrap();
        ServerMessage::Assigned {
            player,
            game_state: GameStateView::of(&game),
        }
    };
    if socket.send(Message::Text(encode(&assigned))).await.is_err() {
        state.seats.lock().unwrap().release(player);
        return;
    }

    broadcast(&state, &ServerMessage::PlayerJoined { player });
    info!("seated {player}");

    loop {
        tokio::select! {
            inbound = socket.recv() => {
                match inbound {
                    Some(Ok(Message::Text(text))) => handle_message(&state, player, &text),
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(_)) => break,
                }
            }
            outbound = rx.recv() => {
                match outbound {
                    Ok(text) => {
                        if socket.send(Message::Text(text)).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        debug!("dropped {skipped} broadcast messages for {player}");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }

    state.seats.lock().unwrap().release(player);
    broadcast(&state, &ServerMessage::PlayerLeft { player });
    info!("{player} disconnected");
}

fn handle_message(state: &AppState, player: Color, raw: &str) {
    // Malformed input is dropped, never surfaced to the sender.
    let Ok(message) = ClientMessage::parse(raw) else {
        debug!("ignoring malformed message from {player}");
        return;
    };

    match message {
        ClientMessage::Move {
            from_row,
            from_col,
            to_row,
            to_col,
        } => {
            let (Ok(from), Ok(to)) = (
                Square::try_new(from_row, from_col),
                Square::try_new(to_row, to_col),
            ) else {
                debug!("ignoring out-of-range move from {player}");
                return;
            };

            let update = {
                let mut game = state.game.lock().unwrap();
                if !game.try_move(player, from, to) {
                    debug!("rejected move {from} -> {to} by {player}");
                    return;
                }
                info!("{player} moved {from} -> {to}");
                ServerMessage::GameState {
                    board: game.board().clone(),
                    current_player: game.current_player(),
                }
            };
            broadcast(state, &update);
        }
        ClientMessage::Chat { text, timestamp } => {
            broadcast(
                state,
                &ServerMessage::Chat {
                    text,
                    player,
                    timestamp,
                },
            );
        }
        ClientMessage::Reset => {
            let reset = {
                let mut game = state.game.lock().unwrap();
                game.reset();
                ServerMessage::GameReset {
                    game_state: GameStateView::of(&game),
                }
            };
            info!("{player} reset the game");
            broadcast(state, &reset);
        }
    }
}

fn encode(message: &ServerMessage) -> String {
    serde_json::to_string(message).expect("server messages serialize")
}

/// Fan a message out to every connected client. Sending only fails when no
/// receiver is subscribed, which is fine to ignore.
fn broadcast(state: &AppState, message: &ServerMessage) {
    let _ = state.tx.send(encode(message));
}
