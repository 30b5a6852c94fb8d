//! One builder per git subcommand.
//!
//! Builders append flags in the order their methods are called; terminal
//! methods append positionals last and run the command through the shared
//! [`CommandState`](crate::builder::CommandState).

mod add;
mod branch;
mod checkout;
mod clone;
mod commit;
mod config;
mod describe;
mod fetch;
mod init;
mod log;
mod ls_remote;
mod merge;
mod pull;
mod push;
mod remote;
mod reset;
mod rev_parse;
mod rm;
mod short_log;
mod show;
mod stash;
mod status;
mod tag;

pub use add::AddCommandBuilder;
pub use branch::BranchCommandBuilder;
pub use checkout::CheckoutCommandBuilder;
pub use clone::CloneCommandBuilder;
pub use commit::CommitCommandBuilder;
pub use config::{ConfigCommandBuilder, ConfigScope, ConfigType};
pub use describe::{Description, DescribeCommandBuilder};
pub use fetch::FetchCommandBuilder;
pub use init::InitCommandBuilder;
pub use log::{Commit, LogCommandBuilder};
pub use ls_remote::{LsRemoteCommandBuilder, Ref};
pub use merge::MergeCommandBuilder;
pub use pull::PullCommandBuilder;
pub use push::PushCommandBuilder;
pub use remote::RemoteCommandBuilder;
pub use reset::ResetCommandBuilder;
pub use rev_parse::RevParseCommandBuilder;
pub use rm::RmCommandBuilder;
pub use short_log::ShortLogCommandBuilder;
pub use show::ShowCommandBuilder;
pub use stash::{StashCommandBuilder, StashEntry};
pub use status::{FileStatus, StatusCode, StatusCommandBuilder, parse_porcelain};
pub use tag::TagCommandBuilder;
