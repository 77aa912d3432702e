//! Fixed demonstration sequence run by the `tableware_client` binary.
//!
//! 404s and serialization failures are reported and the sequence moves on. Transport
//! errors and unexpected statuses abort it.

use crate::client::{ClientError, Outcome, Reply, TablewareClient};
use crate::domain::Tableware;
use serde::Serialize;
use std::fmt::Debug;
use std::io::Write;

pub const DEMO_GET_ID: i32 = 1;
pub const DEMO_UPDATE_ID: i32 = 1;
pub const DEMO_DELETE_ID: i32 = 11;

pub fn demo_new_record() -> Tableware {
    Tableware::new("Mandarin", "Glass", "Cup", 100.0, 800)
}

pub fn demo_updated_record() -> Tableware {
    Tableware::new("c", "c", "c", 2000.0, 300).with_id(DEMO_UPDATE_ID)
}

fn banner<W: Write>(out: &mut W, title: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "------------------------------ {} ------------------------------", title)
}

fn write_reply_head<W: Write, T>(out: &mut W, reply: &Reply<T>) -> std::io::Result<()> {
    writeln!(out, "Response Code: {}", reply.status)?;
    writeln!(out, "Response headers:")?;
    writeln!(out, "{:?}", reply.headers)
}

/// Runs list, get, create, update and delete in order.
pub async fn run_demo<W: Write>(client: &TablewareClient, out: &mut W) -> anyhow::Result<()> {
    banner(out, "Getting all tableware")?;
    list_all(client, out).await?;

    banner(out, "Getting tableware by ID")?;
    get_by_id(client, out, DEMO_GET_ID).await?;

    banner(out, "Posting new tableware")?;
    create(client, out, &demo_new_record()).await?;

    banner(out, "Editing tableware by ID")?;
    update(client, out, DEMO_UPDATE_ID, &demo_updated_record()).await?;

    banner(out, "Deleting tableware by ID")?;
    delete(client, out, DEMO_DELETE_ID).await?;

    Ok(())
}

pub async fn list_all<W: Write>(client: &TablewareClient, out: &mut W) -> anyhow::Result<()> {
    match client.list().await {
        Outcome::Ok(reply) => {
            write_reply_head(out, &reply)?;
            writeln!(out, "Response body:")?;
            for t in &reply.body {
                writeln!(out, "{}", t)?;
            }
            Ok(())
        }
        // The collection path always exists, so a 404 here is not the "missing record" case.
        Outcome::NotFound(nf) => Err(ClientError::UnexpectedStatus {
            status: nf.status,
            body: nf.body,
        }
        .into()),
        Outcome::Failed(e) => Err(e.into()),
    }
}

pub async fn get_by_id<W: Write>(
    client: &TablewareClient,
    out: &mut W,
    id: i32,
) -> anyhow::Result<()> {
    match client.get(id).await {
        Outcome::Ok(reply) => {
            write_reply_head(out, &reply)?;
            writeln!(out, "Response body:")?;
            writeln!(out, "{}", reply.body)?;
            Ok(())
        }
        Outcome::NotFound(nf) => {
            writeln!(out, "Response Code: {}", nf.status)?;
            writeln!(out, "Tableware with id {} not found", id)?;
            Ok(())
        }
        Outcome::Failed(e) => Err(e.into()),
    }
}

pub async fn create<W: Write, B: Serialize + Debug>(
    client: &TablewareClient,
    out: &mut W,
    record: &B,
) -> anyhow::Result<()> {
    match client.create(record).await {
        Outcome::Ok(reply) => {
            writeln!(out, "Response Status: {}", reply.status)?;
            writeln!(out, "Response headers:")?;
            writeln!(out, "{:?}", reply.headers)?;
            writeln!(out, "Response Body: {}", reply.body)?;
            Ok(())
        }
        Outcome::Failed(ClientError::Encode(e)) => {
            tracing::warn!(error = %e, record = ?record, "could not serialize record");
            writeln!(out, "Impossible to process JSON")?;
            Ok(())
        }
        Outcome::NotFound(nf) => Err(ClientError::UnexpectedStatus {
            status: nf.status,
            body: nf.body,
        }
        .into()),
        Outcome::Failed(e) => Err(e.into()),
    }
}

pub async fn update<W: Write, B: Serialize + Debug>(
    client: &TablewareClient,
    out: &mut W,
    id: i32,
    record: &B,
) -> anyhow::Result<()> {
    match client.update(id, record).await {
        Outcome::Ok(reply) => {
            writeln!(out, "Successfully edited an object")?;
            writeln!(out, "{}", reply.body)?;
            Ok(())
        }
        Outcome::NotFound(_) => {
            writeln!(out, "Tableware with id {} not found", id)?;
            Ok(())
        }
        Outcome::Failed(ClientError::Encode(e)) => {
            tracing::warn!(error = %e, record = ?record, "could not serialize record");
            writeln!(out, "Impossible to process JSON")?;
            Ok(())
        }
        Outcome::Failed(e) => Err(e.into()),
    }
}

pub async fn delete<W: Write>(client: &TablewareClient, out: &mut W, id: i32) -> anyhow::Result<()> {
    match client.delete(id).await {
        Outcome::Ok(_) => {
            writeln!(out, "Tableware with id {} deleted successfully", id)?;
            Ok(())
        }
        Outcome::NotFound(nf) => {
            writeln!(out, "Tableware with id {} not found", id)?;
            writeln!(out, "{} on DELETE {}: {:?}", nf.status, nf.url, nf.body)?;
            Ok(())
        }
        Outcome::Failed(e) => Err(e.into()),
    }
}
