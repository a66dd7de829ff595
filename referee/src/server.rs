use std::io::{BufRead, Write};

use paper_soccer::{visualize_field, MoveOutcome, Request, Response, Session};
use tracing::{debug, info, trace, warn};

use crate::recording::Recorder;

/// Runs a single game session for a presentation layer on the other end of `input`
/// and `output`.
///
/// Communication is one JSON [`Request`] per input line and one JSON [`Response`]
/// per output line. Illegal moves and malformed requests are answered, not fatal;
/// an error is returned only on I/O or recording failure.
pub fn serve(
    mut input: impl BufRead,
    mut output: impl Write,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<()> {
    let mut session = Session::new();
    // Raw bytes, so that a line that isn't UTF-8 is just another malformed request
    let mut buf = Vec::new();

    loop {
        buf.clear(); // because read_until() appends to the buffer
        let num_bytes_read = input.read_until(b'\n', &mut buf)?;
        if num_bytes_read == 0 {
            // 0 bytes read means EOF - the presentation layer has exited.
            break;
        }
        if buf.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        trace!(name: "Received request", request = %String::from_utf8_lossy(&buf).trim_end());

        let response = match serde_json::from_slice::<Request>(&buf) {
            Ok(req) => match handle_request(&mut session, recorder, req)? {
                Some(response) => response,
                None => break,
            },
            Err(err) => {
                warn!(%err, "Malformed request");
                Response::Error {
                    message: err.to_string(),
                }
            }
        };

        let response_json = serde_json::to_string(&response)?;
        trace!(name: "Sending response", response = %response_json);
        writeln!(output, "{}", response_json)?;
        output.flush()?;
    }

    // Keep an unfinished game when the presentation layer goes away
    if let Some(recorder) = recorder {
        if recorder.has_moves() {
            recorder.write_game_recording(session.game().status())?;
        }
    }
    Ok(())
}

/// Returns `None` when the session should end.
fn handle_request(
    session: &mut Session,
    recorder: &mut Option<Recorder>,
    req: Request,
) -> anyhow::Result<Option<Response>> {
    let response = match req {
        Request::NewGame => {
            if let Some(recorder) = recorder {
                if recorder.has_moves() {
                    recorder.write_game_recording(session.game().status())?;
                }
            }
            session.new_game();
            info!("New game");
            snapshot(session)
        }
        Request::RequestMove { to } => match session.request_move(to) {
            Ok(()) => {
                debug!(player = %session.game().current_player(), %to, "Move in progress");
                snapshot(session)
            }
            Err(reason) => {
                debug!(player = %session.game().current_player(), %to, %reason, "Rejected move");
                Response::Rejected {
                    reason,
                    snapshot: session.snapshot(),
                }
            }
        },
        Request::MotionFinished => match session.finish_motion() {
            Ok(outcome) => {
                let game = session.game();
                trace!("\n{}", visualize_field(game));
                if let Some(recorder) = recorder {
                    recorder.store_move(game.ball());
                }
                match outcome {
                    MoveOutcome::Goal { scorer } => info!(winner = %scorer, "Goal"),
                    MoveOutcome::Blocked { blocked, winner } => {
                        info!(blocked = %blocked, winner = %winner, "Player is blocked")
                    }
                    MoveOutcome::Bounce { player } => debug!(player = %player, "Bounce"),
                    MoveOutcome::TurnPassed { next } => debug!(next = %next, "Turn passed"),
                }
                if game.status().is_over() {
                    if let Some(recorder) = recorder {
                        let path = recorder.write_game_recording(game.status())?;
                        debug!(path = %path.display(), "Recorded game");
                    }
                }
                snapshot(session)
            }
            Err(err) => Response::Error {
                message: err.to_string(),
            },
        },
        Request::Snapshot => snapshot(session),
        Request::ValidMoves => Response::ValidMoves {
            moves: session.game().valid_moves().into_iter().collect(),
        },
        Request::Bye => return Ok(None),
    };
    Ok(Some(response))
}

fn snapshot(session: &Session) -> Response {
    Response::Snapshot {
        snapshot: session.snapshot(),
    }
}
