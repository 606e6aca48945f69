//! Discord bot integration catalog. Generated data; keep alphabetized
//! by action key.

use crate::action::ActionSpec;
use crate::app::App;
use crate::extract::ExtractionMode;
use crate::field::{FieldDef, FieldKind};

/// The Discord bot app record.
#[must_use]
pub fn app() -> App {
    App::new("discordbot", "Discord bot")
        .with_icon("Discord")
        .with_documentation("https://docs.composio.dev")
        .with_extraction_mode(ExtractionMode::None)
        .with_action(
            ActionSpec::new("DISCORDBOT_ADD_GUILD_MEMBER_ROLE", "Assign role to guild member")
                .with_fields([
                    "DISCORDBOT_ADD_GUILD_MEMBER_ROLE_guild_id",
                    "DISCORDBOT_ADD_GUILD_MEMBER_ROLE_role_id",
                    "DISCORDBOT_ADD_GUILD_MEMBER_ROLE_user_id",
                ]),
        )
        .with_action(
            ActionSpec::new("DISCORDBOT_CREATE_DM", "Initiate user channel with recipient")
                .with_fields([
                    "DISCORDBOT_CREATE_DM_access_tokens",
                    "DISCORDBOT_CREATE_DM_nicks",
                    "DISCORDBOT_CREATE_DM_recipient_id",
                ]),
        )
        .with_action(
            ActionSpec::new("DISCORDBOT_CREATE_GUILD", "Create new guild object").with_fields([
                "DISCORDBOT_CREATE_GUILD_afk_channel_id",
                "DISCORDBOT_CREATE_GUILD_afk_timeout",
                "DISCORDBOT_CREATE_GUILD_channels",
                "DISCORDBOT_CREATE_GUILD_default_message_notifications",
                "DISCORDBOT_CREATE_GUILD_description",
                "DISCORDBOT_CREATE_GUILD_explicit_content_filter",
                "DISCORDBOT_CREATE_GUILD_icon",
                "DISCORDBOT_CREATE_GUILD_name",
                "DISCORDBOT_CREATE_GUILD_preferred_locale",
                "DISCORDBOT_CREATE_GUILD_region",
                "DISCORDBOT_CREATE_GUILD_roles",
                "DISCORDBOT_CREATE_GUILD_system_channel_flags",
                "DISCORDBOT_CREATE_GUILD_system_channel_id",
                "DISCORDBOT_CREATE_GUILD_verification_level",
            ]),
        )
        .with_action(
            ActionSpec::new("DISCORDBOT_DELETE_GUILD_MEMBER_ROLE", "Delete guild member role")
                .with_fields([
                    "DISCORDBOT_DELETE_GUILD_MEMBER_ROLE_guild_id",
                    "DISCORDBOT_DELETE_GUILD_MEMBER_ROLE_role_id",
                    "DISCORDBOT_DELETE_GUILD_MEMBER_ROLE_user_id",
                ]),
        )
        .with_action(
            ActionSpec::new("DISCORDBOT_GET_USER", "Retrieve user by id")
                .with_field("DISCORDBOT_GET_USER_user_id"),
        )
        .with_action(
            ActionSpec::new("DISCORDBOT_LIST_GUILD_MEMBERS", "Get guild members").with_fields([
                "DISCORDBOT_LIST_GUILD_MEMBERS_after",
                "DISCORDBOT_LIST_GUILD_MEMBERS_guild_id",
                "DISCORDBOT_LIST_GUILD_MEMBERS_limit",
            ]),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_ADD_GUILD_MEMBER_ROLE_guild_id", "Guild Id")
                .with_help("Guild Id")
                .required(),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_ADD_GUILD_MEMBER_ROLE_role_id", "Role Id")
                .with_help("Role Id")
                .required(),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_ADD_GUILD_MEMBER_ROLE_user_id", "User Id")
                .with_help("User Id")
                .required(),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_CREATE_DM_access_tokens", "Access Tokens")
                .with_kind(FieldKind::CommaList)
                .with_help("Access Tokens"),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_CREATE_DM_nicks", "Nicks").with_help("Nicks"),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_CREATE_DM_recipient_id", "Recipient Id")
                .with_help("Recipient Id"),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_CREATE_GUILD_afk_channel_id", "Afk Channel Id")
                .with_help("Afk Channel Id"),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_CREATE_GUILD_afk_timeout", "Afk Timeout")
                .with_help("Afk Timeout"),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_CREATE_GUILD_channels", "Channels").with_help("Channels"),
        )
        .with_field(
            FieldDef::new(
                "DISCORDBOT_CREATE_GUILD_default_message_notifications",
                "Default Message Notifications",
            )
            .with_help("Default Message Notifications"),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_CREATE_GUILD_description", "Description")
                .with_help("Description"),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_CREATE_GUILD_explicit_content_filter", "Explicit Content Filter")
                .with_help("Explicit Content Filter"),
        )
        .with_field(FieldDef::new("DISCORDBOT_CREATE_GUILD_icon", "Icon").with_help("Icon"))
        .with_field(
            FieldDef::new("DISCORDBOT_CREATE_GUILD_name", "Name")
                .with_help("Name")
                .required(),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_CREATE_GUILD_preferred_locale", "Preferred Locale")
                .with_help("Preferred Locale"),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_CREATE_GUILD_region", "Region").with_help("Region"),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_CREATE_GUILD_roles", "Roles")
                .with_kind(FieldKind::CommaList)
                .with_help("Roles"),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_CREATE_GUILD_system_channel_flags", "System Channel Flags")
                .with_kind(FieldKind::Integer)
                .with_help("System Channel Flags"),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_CREATE_GUILD_system_channel_id", "System Channel Id")
                .with_help("System Channel Id"),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_CREATE_GUILD_verification_level", "Verification Level")
                .with_help("Verification Level"),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_DELETE_GUILD_MEMBER_ROLE_guild_id", "Guild Id")
                .with_help("Guild Id")
                .required(),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_DELETE_GUILD_MEMBER_ROLE_role_id", "Role Id")
                .with_help("Role Id")
                .required(),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_DELETE_GUILD_MEMBER_ROLE_user_id", "User Id")
                .with_help("User Id")
                .required(),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_GET_USER_user_id", "User Id")
                .with_help("User Id")
                .required(),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_LIST_GUILD_MEMBERS_after", "After")
                .with_kind(FieldKind::Integer)
                .with_help("After"),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_LIST_GUILD_MEMBERS_guild_id", "Guild Id")
                .with_help("Guild Id")
                .required(),
        )
        .with_field(
            FieldDef::new("DISCORDBOT_LIST_GUILD_MEMBERS_limit", "Limit")
                .with_kind(FieldKind::Integer)
                .with_help("Limit"),
        )
        .with_default_action("DISCORDBOT_GET_USER")
        .with_default_action("DISCORDBOT_LIST_GUILD_MEMBERS")
}
