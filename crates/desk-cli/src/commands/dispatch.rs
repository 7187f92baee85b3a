use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands::show::{self, Selection};
use crate::commands::watch;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Rooms => show::handle(Selection::Rooms, ctx, flags).await,
        Commands::Guests => show::handle(Selection::Guests, ctx, flags).await,
        Commands::Reservations => show::handle(Selection::Reservations, ctx, flags).await,
        Commands::Feed => show::handle(Selection::Feed, ctx, flags).await,
        Commands::Hotels => show::handle(Selection::Hotels, ctx, flags).await,
        Commands::Summary => show::handle(Selection::Summary, ctx, flags).await,
        Commands::Views => show::handle(Selection::All, ctx, flags).await,
        Commands::Watch(args) => watch::handle(&args, ctx, flags).await,
    }
}
