use kanal::{Receiver, Sender};
use wordhord_core::term::Term;
use wordhord_dict::dict::Dict;

/// Requests served by the dictionary worker thread.
pub enum Request {
    Search { seq: u64, query: String, limit: u32 },
    Load { seq: u64, nid: i64 },
    Recent { seq: u64, ids: Vec<i64> },
}

/// Responses tagged with the sequence number of the request that produced
/// them, so the caller can drop results a newer request superseded.
pub enum Response {
    Results { seq: u64, terms: Vec<Term> },
    Entry { seq: u64, term: Option<Term> },
    Failed { seq: u64, message: String },
}

/// Run the dictionary on its own thread. The connection never crosses
/// threads; every lookup goes through the channel, which keeps the
/// interaction loop responsive while a search runs.
pub fn spawn(dict: Dict) -> (Sender<Request>, Receiver<Response>) {
    let (req_tx, req_rx) = kanal::bounded::<Request>(64);
    let (resp_tx, resp_rx) = kanal::bounded::<Response>(64);

    std::thread::spawn(move || {
        while let Ok(req) = req_rx.recv() {
            if resp_tx.send(handle(&dict, req)).is_err() {
                break;
            }
        }
        tracing::debug!("dictionary worker exiting");
    });

    (req_tx, resp_rx)
}

fn handle(dict: &Dict, req: Request) -> Response {
    match req {
        Request::Search { seq, query, limit } => match dict.search(&query, limit) {
            Ok(terms) => Response::Results { seq, terms },
            Err(err) => Response::Failed {
                seq,
                message: err.to_string(),
            },
        },
        Request::Load { seq, nid } => match dict.load_by_id(nid) {
            Ok(term) => Response::Entry { seq, term },
            Err(err) => Response::Failed {
                seq,
                message: err.to_string(),
            },
        },
        Request::Recent { seq, ids } => {
            let mut terms = Vec::new();
            for nid in ids {
                match dict.load_by_id(nid) {
                    Ok(Some(term)) => terms.push(term),
                    Ok(None) => {}
                    Err(err) => {
                        return Response::Failed {
                            seq,
                            message: err.to_string(),
                        };
                    }
                }
            }
            Response::Results { seq, terms }
        }
    }
}
