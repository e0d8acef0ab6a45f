mod cli;

use anyhow::Context;
use astro_client::{AstroClient, load_image};
use astro_front::content::{facility_page, home_page};
use astro_front::forms::{RoomForm, UserForm};
use astro_front::notify::{AutoConfirm, Confirm, StdinConfirm};
use astro_front::render;
use astro_front::screens::{
    AdminRoomsScreen, AdminUsersScreen, Dashboard, LoginScreen, RoomBrowser, SearchOutcome,
    my_bookings,
};
use astro_front::{ConsoleNotifier, FrontConfig, Notice, Notifier, Route, logger};
use clap::Parser;
use shared::models::{ImageSource, RoomId, UserId};
use shared::search::{AvailabilityQuery, Occupancy, RoomFilter, quote};
use std::process::ExitCode;
use std::sync::Arc;

use cli::{Cli, Command, RoomFields, RoomsCommand, SearchArgs, UserFields, UsersCommand};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = FrontConfig::from_env().with_overrides(cli.api_url.clone(), cli.log_level.clone());
    logger::init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::debug!(api = %config.api_url, "Astro front-end starting");

    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);
    let mut client =
        AstroClient::new(&config.to_client_config()).context("failed to build HTTP client")?;

    let needs_session = matches!(
        cli.command,
        Command::Rooms(_) | Command::Users(_) | Command::Login
    ) || matches!(&cli.command, Command::Open { path } if path.starts_with("/admin"));
    if needs_session && let (Some(email), Some(password)) = (&cli.email, &cli.password) {
        let mut login = LoginScreen::new(notifier.clone());
        login.email = email.clone();
        login.password = password.clone();
        match login.submit(&mut client).await {
            Ok((session, next)) => {
                if matches!(cli.command, Command::Login) {
                    println!(
                        "{} ({}) · token {} · lanjut ke {next}",
                        session.user.name, session.user.role, session.token
                    );
                }
            }
            Err(_) => return Ok(ExitCode::FAILURE),
        }
    } else if matches!(cli.command, Command::Login) {
        anyhow::bail!("login needs --email and --password");
    }

    let ok = match cli.command {
        Command::Open { path } => open(&path, &client, notifier).await,
        Command::Rooms(cmd) => rooms(cmd, &client, notifier).await,
        Command::Users(cmd) => users(cmd, &client, notifier).await,
        Command::Search(args) => search(args, &client, notifier).await,
        Command::Login => true,
        Command::Dashboard => {
            println!("{}", render::frame("/admin/dashboard", &render::dashboard(&Dashboard::load())));
            true
        }
        Command::Bookings => {
            println!("{}", render::frame("/my-bookings", &render::bookings(&my_bookings())));
            true
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

async fn open(path: &str, client: &AstroClient, notifier: Arc<dyn Notifier>) -> bool {
    let route = Route::resolve(path);
    tracing::debug!(path, %route, "Route resolved");

    let (body, ok) = match route {
        Route::Home => (render::home(&home_page()), true),
        Route::Rooms => {
            let browser = RoomBrowser::showcase();
            let cards: Vec<String> = browser
                .results()
                .into_iter()
                .map(|r| render::room_card(r, None))
                .collect();
            (cards.join("\n\n"), true)
        }
        Route::MyBookings => (render::bookings(&my_bookings()), true),
        Route::Facility(f) => (render::facility(&facility_page(f)), true),
        Route::AdminLogin => (
            "Login Admin\nGunakan: astro-front login --email <EMAIL> --password <PASSWORD>".to_string(),
            true,
        ),
        Route::AdminDashboard => (render::dashboard(&Dashboard::load()), true),
        Route::AdminRooms => {
            let mut screen = AdminRoomsScreen::new(client.rooms(), notifier);
            let ok = screen.mount().await.is_ok();
            let body = format!(
                "{}\n\n{}",
                render::room_stats(&screen.stats()),
                render::room_table(&screen.visible())
            );
            (body, ok)
        }
        Route::AdminUsers => {
            let mut screen = AdminUsersScreen::new(client.users(), notifier);
            let ok = screen.mount().await.is_ok();
            let body = format!(
                "{}\n\n{}",
                render::user_stats(&screen.stats()),
                render::user_table(&screen.visible())
            );
            (body, ok)
        }
        Route::NotFound => ("404 · Halaman tidak ditemukan".to_string(), false),
    };

    println!("{}", render::frame(path, &body));
    ok
}

fn confirmer(yes: bool) -> Box<dyn Confirm> {
    if yes {
        Box::new(AutoConfirm(true))
    } else {
        Box::new(StdinConfirm)
    }
}

async fn apply_room_fields(form: &mut RoomForm, fields: RoomFields) -> anyhow::Result<()> {
    let RoomFields {
        name,
        description,
        room_number,
        room_type,
        category,
        bed,
        capacity,
        price,
        price_weekend,
        status,
        facilities,
        images,
    } = fields;

    let targets = [
        (&mut form.name, name),
        (&mut form.description, description),
        (&mut form.room_number, room_number),
        (&mut form.room_type, room_type),
        (&mut form.category, category),
        (&mut form.bed, bed),
        (&mut form.capacity, capacity),
        (&mut form.price_weekday, price),
        (&mut form.price_weekend, price_weekend),
    ];
    for (slot, value) in targets {
        if let Some(value) = value {
            *slot = value;
        }
    }
    if let Some(status) = status {
        form.status = status;
    }

    if !facilities.is_empty() {
        form.facilities.clear();
        for label in &facilities {
            if !form.toggle_facility(label) {
                tracing::warn!(%label, "Facility not on the list, ignored");
            }
        }
    }

    for image in images {
        let source = if image.starts_with("http://") || image.starts_with("https://") {
            ImageSource::Url(image)
        } else {
            let upload = load_image(&image)
                .await
                .with_context(|| format!("cannot use image {image}"))?;
            ImageSource::Upload(upload)
        };
        form.add_image(source);
    }
    Ok(())
}

async fn rooms(cmd: RoomsCommand, client: &AstroClient, notifier: Arc<dyn Notifier>) -> bool {
    let mut screen = AdminRoomsScreen::new(client.rooms(), notifier.clone());
    if screen.mount().await.is_err() {
        return false;
    }

    match cmd {
        RoomsCommand::List {
            search,
            status,
            room_type,
        } => {
            screen.filter = RoomFilter {
                search,
                status,
                room_type,
            };
            println!("{}", render::room_stats(&screen.stats()));
            println!("{}", render::room_table(&screen.visible()));
            true
        }
        RoomsCommand::Create(fields) => {
            let mut form = RoomForm::create();
            match apply_room_fields(&mut form, fields).await {
                Ok(()) => screen.save(&form).await.is_ok(),
                Err(e) => {
                    notifier.notify(Notice::error(format!("{e:#}")));
                    false
                }
            }
        }
        RoomsCommand::Update { id, fields } => {
            let Ok(mut form) = screen.open_form(Some(&RoomId::new(id))) else {
                return false;
            };
            match apply_room_fields(&mut form, fields).await {
                Ok(()) => screen.save(&form).await.is_ok(),
                Err(e) => {
                    notifier.notify(Notice::error(format!("{e:#}")));
                    false
                }
            }
        }
        RoomsCommand::Delete { id, yes } => screen
            .delete(&RoomId::new(id), confirmer(yes).as_ref())
            .await
            .is_ok(),
    }
}

fn apply_user_fields(form: &mut UserForm, fields: UserFields) {
    if let Some(name) = fields.name {
        form.name = name;
    }
    if let Some(email) = fields.user_email {
        form.email = email;
    }
    if let Some(phone) = fields.phone {
        form.phone = phone;
    }
    if let Some(password) = fields.user_password {
        form.password = password;
    }
    if let Some(role) = fields.role {
        form.role = role;
    }
}

async fn users(cmd: UsersCommand, client: &AstroClient, notifier: Arc<dyn Notifier>) -> bool {
    let mut screen = AdminUsersScreen::new(client.users(), notifier);
    if screen.mount().await.is_err() {
        return false;
    }

    match cmd {
        UsersCommand::List { search, role } => {
            screen.filter.search = search;
            screen.filter.role = role;
            println!("{}", render::user_stats(&screen.stats()));
            println!("{}", render::user_table(&screen.visible()));
            true
        }
        UsersCommand::Create(fields) => {
            let mut form = UserForm::new(None);
            apply_user_fields(&mut form, fields);
            screen.save(&form).await.is_ok()
        }
        UsersCommand::Update { id, fields } => match screen.open_form(Some(&UserId::new(id))) {
            Ok(mut form) => {
                apply_user_fields(&mut form, fields);
                screen.save(&form).await.is_ok()
            }
            Err(_) => false,
        },
        UsersCommand::Delete { id, yes } => screen
            .delete(&UserId::new(id), confirmer(yes).as_ref())
            .await
            .is_ok(),
    }
}

async fn search(args: SearchArgs, client: &AstroClient, notifier: Arc<dyn Notifier>) -> bool {
    let mut browser = if args.remote {
        let mut screen = AdminRoomsScreen::new(client.rooms(), notifier.clone());
        if screen.mount().await.is_err() {
            return false;
        }
        RoomBrowser::new(screen.rooms().to_vec())
    } else {
        RoomBrowser::showcase()
    };

    let occupancy = Occupancy {
        rooms: args.rooms,
        adults: args.adults,
        children: args.children,
    };
    let query = AvailabilityQuery::new(args.check_in, args.check_out)
        .with_occupancy(occupancy)
        .with_filter(RoomFilter {
            search: args.name,
            room_type: args.room_type,
            ..RoomFilter::default()
        });

    let outcome = browser.search(query).clone();
    if let SearchOutcome::Invalid(_) = outcome {
        notifier.notify(Notice::error(outcome.message().unwrap_or_default()));
        return false;
    }
    if let Some(message) = outcome.message() {
        notifier.notify(Notice::info(message));
    }

    match args.view {
        Some(id) => match browser.quick_view(&RoomId::new(id)) {
            Some(view) => println!("{}", render::room_card(view.room, view.quote.as_ref())),
            None => {
                notifier.notify(Notice::error("Kamar tidak ditemukan"));
                return false;
            }
        },
        None => {
            println!("{}", occupancy.summary());
            for room in browser.results() {
                let stay = quote(room, args.check_in, args.check_out).ok();
                println!("\n{}", render::room_card(room, stay.as_ref()));
            }
        }
    }
    true
}
