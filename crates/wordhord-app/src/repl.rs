use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use wordhord_config::Config;
use wordhord_dict::dict::Dict;
use wordhord_history::TermHistory;

use crate::render;
use crate::unix_time_millis;
use crate::worker::{self, Request, Response};

/// Interactive lookup loop. Every line is a search; `:<id>` shows a full
/// entry and records the view, an empty line lists recently viewed
/// entries. The worker answers out of line, and responses from a
/// superseded request are dropped.
pub async fn run(dict: Dict, history: TermHistory, config: Config) -> Result<()> {
    let (req_tx, resp_rx) = worker::spawn(dict);
    let req_tx = req_tx.to_async();
    let resp_rx = resp_rx.to_async();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut latest: u64 = 0;

    println!("wordhord: type a query, :<id> for an entry, an empty line for recent views, Ctrl-C to quit");
    loop {
        tokio::select! {
            _ = signal::ctrl_c() => break,
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if let Some(req) = parse_line(&line, latest + 1, &history, &config)? {
                    latest += 1;
                    req_tx.send(req).await?;
                }
            }
            resp = resp_rx.recv() => {
                print_response(resp?, latest, &history)?;
            }
        }
    }
    history.close()?;
    Ok(())
}

fn parse_line(
    line: &str,
    seq: u64,
    history: &TermHistory,
    config: &Config,
) -> Result<Option<Request>> {
    let line = line.trim();
    if line.is_empty() {
        let ids = history.get_ids(config.history.seed_limit)?;
        Ok(Some(Request::Recent { seq, ids }))
    } else if let Some(id) = line.strip_prefix(':') {
        match id.trim().parse() {
            Ok(nid) => Ok(Some(Request::Load { seq, nid })),
            Err(_) => {
                println!("not an entry id: {id}");
                Ok(None)
            }
        }
    } else {
        Ok(Some(Request::Search {
            seq,
            query: line.to_string(),
            limit: config.search.candidate_limit,
        }))
    }
}

fn print_response(resp: Response, latest: u64, history: &TermHistory) -> Result<()> {
    match resp {
        Response::Results { seq, terms } if seq == latest => {
            if terms.is_empty() {
                println!("(no matches)");
            }
            for (rank, term) in terms.iter().enumerate() {
                println!("{}", render::result_line(rank + 1, term));
            }
        }
        Response::Entry { seq, term } if seq == latest => match term {
            Some(term) => {
                history.record_id(term.nid, unix_time_millis())?;
                println!("{}", render::entry(&term));
            }
            None => println!("no such entry"),
        },
        Response::Failed { seq, message } if seq == latest => {
            tracing::error!(%message, "lookup failed");
        }
        // A newer request superseded this response.
        _ => {}
    }
    Ok(())
}
