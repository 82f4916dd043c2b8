use super::args::{
    CartCommand, Cli, CollectionsCommand, Commands, ConfigCommand, LookupCommand, StateCommand,
    WishlistCommand,
};
use super::handlers::{self, HandlerContext};
use anyhow::Result;
use fitpic_runtime::resolve_data_dir;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    tracing::debug!(data_dir = %data_dir.display(), "Resolved data directory");
    let ctx = HandlerContext::new(cli.format, data_dir)?;

    match cli.command {
        Commands::State { command } => match command {
            StateCommand::Show => handlers::state::show(&ctx),
            StateCommand::Get { path, default } => {
                handlers::state::get(&ctx, &path, default.as_deref())
            }
            StateCommand::Set { path, value } => handlers::state::set(&ctx, &path, &value),
            StateCommand::Reset => handlers::state::reset(&ctx),
        },

        Commands::Outfits {
            page,
            tag,
            location,
            style,
            event,
            season,
        } => handlers::outfits::list(
            &ctx,
            page,
            handlers::outfits::FilterArgs {
                tag,
                location,
                style,
                event,
                season,
            },
        ),

        Commands::Outfit { id } => handlers::outfits::show(&ctx, id),

        Commands::Cart { command } => match command {
            CartCommand::List => handlers::cart::list(&ctx),
            CartCommand::Add { outfit_id, product } => {
                handlers::cart::add(&ctx, outfit_id, product)
            }
            CartCommand::Quantity { item_id, quantity } => {
                handlers::cart::set_quantity(&ctx, &item_id, quantity)
            }
            CartCommand::Remove { item_id } => handlers::cart::remove(&ctx, &item_id),
            CartCommand::Clear => handlers::cart::clear(&ctx),
            CartCommand::Checkout => handlers::cart::checkout(&ctx),
        },

        Commands::Wishlist { command } => match command {
            WishlistCommand::List => handlers::wishlist::list(&ctx),
            WishlistCommand::Toggle { outfit_id } => handlers::wishlist::toggle(&ctx, outfit_id),
        },

        Commands::Collections { command } => match command {
            CollectionsCommand::List => handlers::collections::list(&ctx),
            CollectionsCommand::Create { name, outfit } => {
                handlers::collections::create(&ctx, &name, outfit)
            }
            CollectionsCommand::Toggle {
                collection_id,
                outfit_id,
            } => handlers::collections::toggle(&ctx, &collection_id, outfit_id),
        },

        Commands::Rate { outfit_id, rating } => handlers::account::rate(&ctx, outfit_id, rating),

        Commands::Schedule {
            outfit_id,
            day,
            occasion,
        } => handlers::account::schedule(&ctx, outfit_id, &day, &occasion),

        Commands::Remix {
            outfit_id,
            modifications,
        } => handlers::account::remix(&ctx, outfit_id, &modifications),

        Commands::Theme => handlers::account::toggle_theme(&ctx),

        Commands::Dispatch { attributes } => handlers::dispatch::handle(&ctx, attributes),

        Commands::Simulate { speed, fail } => handlers::simulate::handle(&ctx, speed, fail),

        Commands::Export { output } => handlers::account::export(&ctx, output.as_deref()),

        Commands::DeleteAccount { yes } => handlers::account::delete_account(&ctx, yes),

        Commands::Lookup { command } => match command {
            LookupCommand::Countries { query } => {
                handlers::lookup::countries(&ctx, query.as_deref())
            }
            LookupCommand::Locations { input } => handlers::lookup::locations(&ctx, &input),
            LookupCommand::Products { category } => handlers::lookup::products(&ctx, &category),
            LookupCommand::Phone { number } => handlers::lookup::phone(&ctx, &number),
        },

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx),
            ConfigCommand::Init { force } => handlers::config::init(&ctx, force),
        },
    }
}
