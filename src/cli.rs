use crate::api::auth::{Credentials, Registration};
use crate::api::likes::Like;
use crate::api::matches::{decorate_likes, HousingMatch, RoommateMatch};
use crate::api::preferences::{HousingPreferences, RoommatePreferences};
use crate::api::{ApiClient, ApiError};
use crate::session::{Language, Session, User};
use crate::storage::SessionStorage;
use crate::store::{SessionStore, SubscriptionId};
use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

/// Everything a command needs: the session store and the API client.
pub struct Context {
    pub store: RefCell<SessionStore<Box<dyn SessionStorage>>>,
    pub api: ApiClient,
    pub storage_label: String,
}

impl Context {
    fn token(&self) -> Option<String> {
        self.store.borrow().token().map(str::to_string)
    }

    fn require_user(&self) -> Result<User> {
        self.store
            .borrow()
            .user()
            .cloned()
            .ok_or_else(|| anyhow!("Not logged in. Run `login` first."))
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the current session
    Status,
    /// Switch the UI language (en, fr, ar)
    Language { code: String },
    /// Log in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and log in
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
    },
    /// Clear identity and token
    Logout {
        #[arg(long, help = "Do not notify the server")]
        local: bool,
    },
    /// Manage the stored bearer token
    Token(TokenCommand),
    /// Manage the stored identity
    User(UserCommand),
    /// Show or edit the profile
    Profile(ProfileCommand),
    /// Read or write matching preferences
    Prefs(PrefsCommand),
    /// List matches computed by the backend
    Matches {
        kind: Kind,
        #[arg(long, help = "Refresh liked flags from your like list")]
        reconcile: bool,
    },
    /// Like another user
    Like { user_id: String },
    /// Check whether you liked a user
    Liked { user_id: String },
    /// List your likes
    Likes,
}

#[derive(Args, Debug)]
pub struct TokenCommand {
    #[command(subcommand)]
    command: TokenSubcommand,
}

#[derive(Subcommand, Debug)]
enum TokenSubcommand {
    Set { token: String },
    Clear,
}

#[derive(Args, Debug)]
pub struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
enum UserSubcommand {
    /// Forget the identity but keep the token
    Clear,
}

#[derive(Args, Debug)]
pub struct ProfileCommand {
    #[command(subcommand)]
    command: ProfileSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProfileSubcommand {
    Show,
    /// Replace the local profile with the server's
    Pull,
    /// Send the local profile to the server
    Push,
    /// Edit the local profile
    Update(ProfileEdit),
}

#[derive(Args, Debug, Default)]
struct ProfileEdit {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    age: Option<u32>,
    #[arg(long)]
    job: Option<String>,
    #[arg(long)]
    bio: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    phone: Option<String>,
}

impl ProfileEdit {
    fn apply(self, user: &mut User) {
        if let Some(v) = self.first_name {
            user.first_name = v;
        }
        if let Some(v) = self.last_name {
            user.last_name = v;
        }
        if let Some(v) = self.age {
            user.age = Some(v);
        }
        if let Some(v) = self.job {
            user.job = Some(v);
        }
        if let Some(v) = self.bio {
            user.bio = Some(v);
        }
        if let Some(v) = self.city {
            user.city = Some(v);
        }
        if let Some(v) = self.phone {
            user.phone = Some(v);
        }
    }
}

#[derive(Args, Debug)]
pub struct PrefsCommand {
    #[command(subcommand)]
    command: PrefsSubcommand,
}

#[derive(Subcommand, Debug)]
enum PrefsSubcommand {
    Get {
        kind: Kind,
    },
    Set {
        kind: Kind,
        #[arg(long, help = "Preferences as a JSON object")]
        data: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    #[value(alias = "roommates")]
    Roommate,
    Housing,
}

/// One line of interactive input
#[derive(Parser, Debug)]
#[command(name = "flatmate", no_binary_name = true)]
struct ReplLine {
    #[command(subcommand)]
    command: Command,
}

pub fn run_once(ctx: &Context, command: Command) -> Result<()> {
    execute(ctx, command).map_err(explain)
}

pub fn run_repl(ctx: &Context) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!("flatmate - type help for commands, exit to quit");

    let (prompt, subscription) = track_prompt(ctx);
    let result = repl_loop(ctx, &mut rl, &prompt);
    ctx.store.borrow_mut().unsubscribe(subscription);
    result
}

/// Prompt showing the language, plus the user's initials once logged in
fn prompt_for(session: &Session) -> String {
    match session.user() {
        Some(user) => format!("flatmate:{}:{}> ", session.language(), user.initials()),
        None => format!("flatmate:{}> ", session.language()),
    }
}

fn track_prompt(ctx: &Context) -> (Rc<RefCell<String>>, SubscriptionId) {
    let prompt = Rc::new(RefCell::new(prompt_for(ctx.store.borrow().session())));
    let sink = prompt.clone();
    let id = ctx
        .store
        .borrow_mut()
        .subscribe(move |session| *sink.borrow_mut() = prompt_for(session));
    (prompt, id)
}

fn repl_loop(ctx: &Context, rl: &mut DefaultEditor, prompt: &RefCell<String>) -> Result<()> {
    loop {
        let current = prompt.borrow().clone();
        match rl.readline(&current) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;

                if matches!(line, "exit" | "quit") {
                    break;
                }

                let words = match shell_words::split(line) {
                    Ok(words) => words,
                    Err(e) => {
                        eprintln!("Input error: {}", e);
                        continue;
                    }
                };

                match ReplLine::try_parse_from(words) {
                    Ok(parsed) => {
                        if let Err(e) = execute(ctx, parsed.command) {
                            eprintln!("Error: {:#}", explain(e));
                        }
                    }
                    Err(e) => {
                        let _ = e.print();
                    }
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Input error: {}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Attach a hint to errors the user can act on.
fn explain(err: anyhow::Error) -> anyhow::Error {
    match err.downcast_ref::<ApiError>() {
        Some(api) if api.is_unauthorized() => {
            err.context("Session rejected by the server; run `login` again")
        }
        _ => err,
    }
}

fn execute(ctx: &Context, command: Command) -> Result<()> {
    match command {
        Command::Status => show_status(ctx),
        Command::Language { code } => {
            let language = Language::parse(&code)?;
            ctx.store.borrow_mut().set_language(language);
            println!(
                "Language: {} ({}, {})",
                language.name(),
                language.code(),
                language.direction().as_str()
            );
        }
        Command::Login { email, password } => {
            let resp = ctx.api.auth(None).login(&Credentials { email, password })?;
            println!("Logged in as {}", resp.user.full_name());
            ctx.store.borrow_mut().login(resp.user, resp.token);
        }
        Command::Signup {
            email,
            password,
            first_name,
            last_name,
        } => {
            let form = Registration {
                email,
                password,
                first_name,
                last_name,
            };
            let resp = ctx.api.auth(None).register(&form)?;
            println!("Welcome, {}", resp.user.full_name());
            ctx.store.borrow_mut().login(resp.user, resp.token);
        }
        Command::Logout { local } => {
            let token = ctx.token();
            if !local && token.is_some() {
                if let Err(e) = ctx.api.auth(token.as_deref()).logout() {
                    tracing::warn!("Server logout failed: {}", e);
                }
            }
            ctx.store.borrow_mut().logout();
            println!("Logged out");
        }
        Command::Token(cmd) => match cmd.command {
            TokenSubcommand::Set { token } => {
                ctx.store.borrow_mut().set_token(Some(token));
                println!("Token stored");
            }
            TokenSubcommand::Clear => {
                ctx.store.borrow_mut().set_token(None);
                println!("Token cleared");
            }
        },
        Command::User(cmd) => match cmd.command {
            UserSubcommand::Clear => {
                ctx.store.borrow_mut().set_user(None);
                println!("Identity cleared (token kept; use `logout` to clear both)");
            }
        },
        Command::Profile(cmd) => run_profile(ctx, cmd.command)?,
        Command::Prefs(cmd) => run_prefs(ctx, cmd.command)?,
        Command::Matches { kind, reconcile } => run_matches(ctx, kind, reconcile)?,
        Command::Like { user_id } => {
            let user = ctx.require_user()?;
            let token = ctx.token();
            let like = ctx.api.likes(token.as_deref()).like(&user.id, &user_id)?;
            println!("Liked user {} (like #{})", like.liked_user_id, like.id);
        }
        Command::Liked { user_id } => {
            let user = ctx.require_user()?;
            let token = ctx.token();
            let liked = ctx
                .api
                .likes(token.as_deref())
                .has_liked(&user.id, &user_id)?;
            println!("{}", if liked { "yes" } else { "no" });
        }
        Command::Likes => {
            let likes = fetch_likes(ctx)?;
            if likes.is_empty() {
                println!("No likes yet.");
            }
            for like in likes {
                println!("  #{} -> user {}", like.id, like.liked_user_id);
            }
        }
    }
    Ok(())
}

fn show_status(ctx: &Context) {
    let store = ctx.store.borrow();
    let session = store.session();
    let language = session.language();
    println!(
        "Language: {} ({})",
        language.code(),
        session.text_direction().as_str()
    );
    match session.user() {
        Some(user) => println!("User: {} <{}> (id {})", user.full_name(), user.email, user.id),
        None => println!("User: -"),
    }
    println!(
        "Token: {}",
        session.token().map(mask_token).unwrap_or_else(|| "-".to_string())
    );
    println!("Authenticated: {}", store.is_authenticated());
    println!("API: {}", ctx.api.base_url());
    println!("Storage: {}", ctx.storage_label);
}

fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    if token.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{}…", visible)
    }
}

fn run_profile(ctx: &Context, command: ProfileSubcommand) -> Result<()> {
    match command {
        ProfileSubcommand::Show => {
            let user = ctx.require_user()?;
            print_profile(&user);
        }
        ProfileSubcommand::Pull => {
            let token = ctx.token();
            let user = ctx.api.users(token.as_deref()).profile()?;
            print_profile(&user);
            ctx.store.borrow_mut().set_user(Some(user));
        }
        ProfileSubcommand::Push => {
            let user = ctx.require_user()?;
            let token = ctx.token();
            let saved = ctx.api.users(token.as_deref()).update_profile(&user)?;
            println!("Profile saved");
            ctx.store.borrow_mut().set_user(Some(saved));
        }
        ProfileSubcommand::Update(edit) => {
            let mut user = ctx.require_user()?;
            edit.apply(&mut user);
            ctx.store.borrow_mut().set_user(Some(user));
            println!("Profile updated locally (run `profile push` to save it)");
        }
    }
    Ok(())
}

fn print_profile(user: &User) {
    println!("{} [{}]", user.full_name(), user.initials());
    println!("  email: {}", user.email);
    let optional = [
        ("age", user.age.map(|a| a.to_string())),
        ("gender", user.gender.clone()),
        ("job", user.job.clone()),
        ("city", user.city.clone()),
        ("phone", user.phone.clone()),
        ("bio", user.bio.clone()),
        ("avatar", user.avatar.clone()),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            println!("  {}: {}", label, value);
        }
    }
}

fn run_prefs(ctx: &Context, command: PrefsSubcommand) -> Result<()> {
    let user = ctx.require_user()?;
    let token = ctx.token();
    let prefs = ctx.api.preferences(token.as_deref());
    match command {
        PrefsSubcommand::Get { kind: Kind::Roommate } => {
            print_json(&prefs.get_roommate(&user.id)?)?
        }
        PrefsSubcommand::Get { kind: Kind::Housing } => {
            print_json(&prefs.get_housing(&user.id)?)?
        }
        PrefsSubcommand::Set {
            kind: Kind::Roommate,
            data,
        } => {
            let body: RoommatePreferences = serde_json::from_str(&data)?;
            print_json(&prefs.save_roommate(&user.id, &body)?)?
        }
        PrefsSubcommand::Set {
            kind: Kind::Housing,
            data,
        } => {
            let body: HousingPreferences = serde_json::from_str(&data)?;
            print_json(&prefs.save_housing(&user.id, &body)?)?
        }
    }
    Ok(())
}

fn fetch_likes(ctx: &Context) -> Result<Vec<Like>> {
    let user = ctx.require_user()?;
    let token = ctx.token();
    Ok(ctx.api.likes(token.as_deref()).user_likes(&user.id)?)
}

fn run_matches(ctx: &Context, kind: Kind, reconcile: bool) -> Result<()> {
    let user = ctx.require_user()?;
    let token = ctx.token();
    let matches = ctx.api.matches(token.as_deref());
    match kind {
        Kind::Roommate => {
            let mut resp = matches.roommates(&user.id)?;
            if reconcile {
                let likes = fetch_likes(ctx)?;
                decorate_likes(&mut resp.matches, &likes);
            }
            if resp.matches.is_empty() {
                println!("No roommate matches yet.");
            }
            for m in &resp.matches {
                println!("{}", roommate_line(m));
            }
        }
        Kind::Housing => {
            let resp = matches.housing(&user.id)?;
            if resp.matches.is_empty() {
                println!("No housing matches yet.");
            }
            for m in &resp.matches {
                println!("{}", housing_line(m));
            }
        }
    }
    Ok(())
}

fn roommate_line(m: &RoommateMatch) -> String {
    let name = m.candidate_name.as_deref().unwrap_or(&m.candidate_id);
    let mut line = format!("{:>5.1}%  {}", m.score, name);
    if let Some(age) = m.age {
        line.push_str(&format!(", {}", age));
    }
    if let Some(city) = &m.city {
        line.push_str(&format!(" - {}", city));
    }
    if let Some(label) = &m.compatibility_label {
        line.push_str(&format!(" [{}]", label));
    }
    if m.is_liked == Some(true) {
        line.push_str(" ♥");
    }
    line
}

fn housing_line(m: &HousingMatch) -> String {
    let place = m.address.as_deref().unwrap_or(&m.logement_id);
    let mut line = format!("{:>5.1}%  {}", m.score, place);
    if let Some(price) = m.price {
        line.push_str(&format!(" - {:.0}", price));
    }
    if let Some(rooms) = m.rooms {
        line.push_str(&format!(", {} rooms", rooms));
    }
    if let Some(label) = &m.compatibility_label {
        line.push_str(&format!(" [{}]", label));
    }
    line
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::fake::{FakeTransport, RequestLog};
    use crate::session::test_user;
    use crate::storage::MemoryStorage;

    fn context(transport: FakeTransport) -> (Context, MemoryStorage) {
        let storage = MemoryStorage::new();
        let store = SessionStore::open(
            Box::new(storage.clone()) as Box<dyn SessionStorage>,
            Language::En,
        );
        let ctx = Context {
            store: RefCell::new(store),
            api: ApiClient::with_transport("http://api.test", Box::new(transport)),
            storage_label: "<memory>".to_string(),
        };
        (ctx, storage)
    }

    fn logged_in(transport: FakeTransport) -> (Context, MemoryStorage) {
        let (ctx, storage) = context(transport);
        ctx.store
            .borrow_mut()
            .login(test_user("1"), "live-token".to_string());
        (ctx, storage)
    }

    fn parse(line: &str) -> Command {
        ReplLine::try_parse_from(shell_words::split(line).unwrap())
            .unwrap()
            .command
    }

    fn last_auth(log: &RequestLog) -> Option<String> {
        log.borrow()
            .last()
            .and_then(|r| r.header("Authorization").map(str::to_string))
    }

    #[test]
    fn test_repl_line_parsing() {
        assert!(matches!(parse("status"), Command::Status));
        assert!(matches!(
            parse("matches roommates --reconcile"),
            Command::Matches {
                kind: Kind::Roommate,
                reconcile: true
            }
        ));
        match parse(r#"prefs set housing --data '{"budget": 500}'"#) {
            Command::Prefs(PrefsCommand {
                command: PrefsSubcommand::Set { kind, data },
            }) => {
                assert_eq!(kind, Kind::Housing);
                assert_eq!(data, r#"{"budget": 500}"#);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_login_stores_session() {
        let (t, log) = FakeTransport::new();
        let t = t.json(
            200,
            r#"{"user":{"id":"9","email":"a@b.c","firstName":"Ahmed","lastName":"K"},"token":"jwt-9"}"#,
        );
        let (ctx, storage) = context(t);

        execute(&ctx, parse("login --email a@b.c --password pw")).unwrap();

        let store = ctx.store.borrow();
        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("jwt-9"));
        assert!(storage.raw().unwrap().contains("jwt-9"));
        assert!(last_auth(&log).is_none());
    }

    #[test]
    fn test_failed_login_leaves_session_untouched() {
        let (t, _) = FakeTransport::new();
        let (ctx, _) = context(t.text(401, "bad credentials"));
        let err = execute(&ctx, parse("login --email a@b.c --password no")).unwrap_err();
        let err = explain(err);
        assert!(format!("{:#}", err).contains("bad credentials"));
        assert!(format!("{:#}", err).contains("login"));
        assert!(!ctx.store.borrow().is_authenticated());
    }

    #[test]
    fn test_requests_carry_live_token() {
        let (t, log) = FakeTransport::new();
        let (ctx, storage) = logged_in(t.json(200, r#"{"matches":[]}"#));

        // Persisted snapshot diverges from memory; memory wins.
        storage.set_failing(true);
        ctx.store
            .borrow_mut()
            .set_token(Some("rotated".to_string()));

        execute(&ctx, parse("matches housing")).unwrap();
        assert_eq!(last_auth(&log).as_deref(), Some("Bearer rotated"));
        assert_eq!(log.borrow()[0].url, "http://api.test/api/match/housing/1");
    }

    #[test]
    fn test_commands_requiring_identity_fail_when_logged_out() {
        let (t, log) = FakeTransport::new();
        let (ctx, _) = context(t);
        let err = execute(&ctx, parse("likes")).unwrap_err();
        assert!(err.to_string().contains("Not logged in"));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_user_clear_keeps_token() {
        let (t, _) = FakeTransport::new();
        let (ctx, _) = logged_in(t);
        execute(&ctx, parse("user clear")).unwrap();
        let store = ctx.store.borrow();
        assert!(!store.is_authenticated());
        assert_eq!(store.token(), Some("live-token"));
    }

    #[test]
    fn test_logout_clears_even_if_server_fails() {
        let (t, log) = FakeTransport::new();
        let (ctx, storage) = logged_in(t.unreachable());
        execute(&ctx, parse("logout")).unwrap();

        assert_eq!(last_auth(&log).as_deref(), Some("Bearer live-token"));
        let reloaded = SessionStore::open(storage, Language::En);
        assert!(reloaded.user().is_none());
        assert!(reloaded.token().is_none());
    }

    #[test]
    fn test_local_logout_skips_server() {
        let (t, log) = FakeTransport::new();
        let (ctx, _) = logged_in(t);
        execute(&ctx, parse("logout --local")).unwrap();
        assert!(log.borrow().is_empty());
        assert!(!ctx.store.borrow().is_authenticated());
    }

    #[test]
    fn test_language_command() {
        let (t, _) = FakeTransport::new();
        let (ctx, _) = logged_in(t);
        execute(&ctx, parse("language ar")).unwrap();
        assert_eq!(ctx.store.borrow().session().language(), Language::Ar);
        assert!(ctx.store.borrow().is_authenticated());
        assert!(execute(&ctx, parse("language xx")).is_err());
    }

    #[test]
    fn test_profile_update_is_local() {
        let (t, log) = FakeTransport::new();
        let (ctx, _) = logged_in(t);
        execute(&ctx, parse("profile update --city Rabat --age 30")).unwrap();
        let store = ctx.store.borrow();
        let user = store.user().unwrap();
        assert_eq!(user.city.as_deref(), Some("Rabat"));
        assert_eq!(user.age, Some(30));
        assert_eq!(user.first_name, "Sara");
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_profile_pull_replaces_user() {
        let (t, _) = FakeTransport::new();
        let t = t.json(
            200,
            r#"{"id":"1","email":"new@b.c","firstName":"Sara","lastName":"B","job":"Teacher"}"#,
        );
        let (ctx, _) = logged_in(t);
        execute(&ctx, parse("profile pull")).unwrap();
        let store = ctx.store.borrow();
        assert_eq!(store.user().unwrap().job.as_deref(), Some("Teacher"));
        assert_eq!(store.token(), Some("live-token"));
    }

    #[test]
    fn test_prefs_set_sends_typed_body() {
        let (t, log) = FakeTransport::new();
        let (ctx, _) = logged_in(t.json(200, r#"{"id":1,"pets":false}"#));
        execute(&ctx, parse(r#"prefs set roommate --data '{"pets": false}'"#)).unwrap();
        let req = &log.borrow()[0];
        assert_eq!(req.url, "http://api.test/api/preferences/colocataires/1");
        assert_eq!(req.body.as_deref(), Some(r#"{"pets":false}"#));
    }

    #[test]
    fn test_matches_reconcile_fetches_likes() {
        let (t, log) = FakeTransport::new();
        let t = t
            .json(
                200,
                r#"{"matches":[{"candidateId":"2","score":90},{"candidateId":"3","score":70}]}"#,
            )
            .json(200, r#"[{"id":1,"userId":1,"likedUserId":3}]"#);
        let (ctx, _) = logged_in(t);
        execute(&ctx, parse("matches roommate --reconcile")).unwrap();
        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log[1].url, "http://api.test/api/likes/user/1");
    }

    #[test]
    fn test_roommate_line_marks_liked() {
        let m = RoommateMatch {
            candidate_id: "2".to_string(),
            score: 92.0,
            candidate_name: Some("Ahmed".to_string()),
            age: Some(27),
            compatibility_label: Some("Excellent".to_string()),
            is_liked: Some(true),
            ..RoommateMatch::default()
        };
        assert_eq!(roommate_line(&m), " 92.0%  Ahmed, 27 [Excellent] ♥");
    }

    #[test]
    fn test_prompt_follows_session_until_unsubscribed() {
        let (t, _) = FakeTransport::new();
        let (ctx, _) = context(t);
        let (prompt, id) = track_prompt(&ctx);
        assert_eq!(*prompt.borrow(), "flatmate:en> ");

        ctx.store
            .borrow_mut()
            .login(test_user("1"), "tok".to_string());
        execute(&ctx, parse("language fr")).unwrap();
        assert_eq!(*prompt.borrow(), "flatmate:fr:SB> ");

        assert!(ctx.store.borrow_mut().unsubscribe(id));
        execute(&ctx, parse("logout --local")).unwrap();
        assert_eq!(*prompt.borrow(), "flatmate:fr:SB> ");
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("abc"), "****");
        assert_eq!(mask_token("abcdefgh"), "abcd…");
    }
}
