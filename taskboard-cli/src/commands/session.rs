//! `taskboard login|register|logout|whoami`

use anyhow::Result;
use serde_json::json;
use taskboard_kanban::{KanbanBoard, StateStorage, User};

use super::to_json;

pub fn login<S: StateStorage + Clone>(
    board: &mut KanbanBoard<S>,
    email: &str,
    password: &str,
    name: Option<&str>,
    json: bool,
) -> Result<String> {
    let user = board.login(email, password, name);
    signed_in(&user, json)
}

pub fn register<S: StateStorage + Clone>(
    board: &mut KanbanBoard<S>,
    email: &str,
    password: &str,
    name: &str,
    json: bool,
) -> Result<String> {
    let user = board.register(email, password, name);
    signed_in(&user, json)
}

pub fn logout<S: StateStorage + Clone>(board: &mut KanbanBoard<S>, json: bool) -> Result<String> {
    board.logout();
    if json {
        return to_json(&json!({ "isAuthenticated": false }));
    }
    Ok("Signed out".to_string())
}

pub fn whoami<S: StateStorage + Clone>(board: &KanbanBoard<S>, json: bool) -> Result<String> {
    let auth = board.auth();
    if json {
        return to_json(auth);
    }
    match auth.user() {
        Some(user) => Ok(format!("{} <{}>", user.name, user.email)),
        None => Ok("Not signed in".to_string()),
    }
}

fn signed_in(user: &User, json: bool) -> Result<String> {
    if json {
        return to_json(user);
    }
    Ok(format!("Signed in as {} <{}>", user.name, user.email))
}
