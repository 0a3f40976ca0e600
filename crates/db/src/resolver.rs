//! Derived views spanning several entity types.
//!
//! Everything here is a pure function over entity slices and is recomputed
//! in full on every call.

use indexmap::IndexMap;
use teamspace_core::naming::{avatar_url, placeholder_user_id, USER_AVATAR_SIZE};

use crate::models::chat::{Channel, ChatTeam, Dm, Message, TeamKind, Visibility};
use crate::models::space::Space;
use crate::models::squad::{Member, Squad, DEFAULT_MEMBER_ROLE};
use crate::models::user::{User, UserProfile};
use crate::seeds::{CURRENT_USER_ID, WELCOME_AUTHOR_ID};

/// Name of the channel every synthesized space team starts with.
pub const GENERAL_CHANNEL_NAME: &str = "General";

/// Copy a squad's roster into space members, one to one.
pub fn project_members(squad: &Squad) -> Vec<Member> {
    squad
        .members
        .iter()
        .map(|m| Member {
            name: m.name.clone(),
            avatar: m.avatar.clone(),
            role: m.role.clone(),
            user_id: m.user_id.clone(),
        })
        .collect()
}

/// The roster a space should show right now.
///
/// A space whose squad still exists reads that squad's current roster, so
/// squad edits are visible without rewriting the space. A space without a
/// squad, or whose squad was deleted, reads its stored snapshot.
pub fn live_space_members(space: &Space, squads: &[Squad]) -> Vec<Member> {
    space
        .squad_id
        .as_deref()
        .and_then(|id| squads.iter().find(|s| s.id == id))
        .map(project_members)
        .unwrap_or_else(|| space.members.clone())
}

/// Resolve a roster entry to a user: by `user_id`, then by exact name, else a
/// placeholder built from the member itself.
pub fn resolve_member_user(member: &Member, users: &[User]) -> User {
    let by_id = member
        .user_id
        .as_deref()
        .and_then(|id| users.iter().find(|u| u.id == id));
    let by_name = || users.iter().find(|u| u.name == member.name);
    match by_id.or_else(by_name) {
        Some(user) => user.clone(),
        None => User {
            id: placeholder_user_id(&member.name),
            name: member.name.clone(),
            avatar: member.avatar.clone(),
            profile: UserProfile::Directory {
                role: DEFAULT_MEMBER_ROLE.to_string(),
            },
        },
    }
}

/// Look up a user by id, or stand in a placeholder named after the id.
pub fn user_by_id_or_placeholder(users: &[User], id: &str) -> User {
    users
        .iter()
        .find(|u| u.id == id)
        .cloned()
        .unwrap_or_else(|| User {
            id: id.to_string(),
            name: id.to_string(),
            avatar: avatar_url(id, USER_AVATAR_SIZE),
            profile: UserProfile::Bare {},
        })
}

/// Id of the default channel of the team synthesized for `space_id`.
pub fn general_channel_id(space_id: &str) -> String {
    format!("c-{space_id}-general")
}

/// The project chat team for one space.
///
/// `space.members` is used as given; pass a space whose roster was already
/// resolved with [`live_space_members`] to get current membership.
pub fn synthesize_chat_team(space: &Space, users: &[User]) -> ChatTeam {
    let members = space
        .members
        .iter()
        .map(|m| resolve_member_user(m, users))
        .collect();
    let welcome = Message {
        id: format!("m-{}-1", space.id),
        user_id: WELCOME_AUTHOR_ID.to_string(),
        text: format!("Welcome to the {} space!", space.name),
        timestamp: "10:00 AM".to_string(),
    };
    ChatTeam {
        id: space.id.clone(),
        name: space.name.clone(),
        kind: TeamKind::Project,
        description: space.description.clone(),
        owner: CURRENT_USER_ID.to_string(),
        members,
        visibility: Visibility::Private,
        icon: avatar_url(&space.id, USER_AVATAR_SIZE),
        channels: vec![Channel {
            id: general_channel_id(&space.id),
            team_id: space.id.clone(),
            name: GENERAL_CHANNEL_NAME.to_string(),
            messages: vec![welcome],
        }],
    }
}

/// One project chat team per space, in space order.
pub fn synthesize_chat_teams(spaces: &[Space], users: &[User]) -> Vec<ChatTeam> {
    spaces
        .iter()
        .map(|space| synthesize_chat_team(space, users))
        .collect()
}

/// Merge rosters into one list keyed by member name.
///
/// A name keeps the position where it first appeared; its fields come from
/// the last list that mentions it.
pub fn unique_members<'a, I>(lists: I) -> Vec<Member>
where
    I: IntoIterator<Item = &'a [Member]>,
{
    let mut by_name: IndexMap<String, Member> = IndexMap::new();
    for list in lists {
        for member in list {
            by_name.insert(member.name.clone(), member.clone());
        }
    }
    by_name.into_values().collect()
}

/// Everyone appearing in any team or DM, keyed by user id, first occurrence
/// wins.
pub fn all_chat_members(teams: &[ChatTeam], dms: &[Dm]) -> Vec<User> {
    let mut by_id: IndexMap<String, User> = IndexMap::new();
    let people = teams
        .iter()
        .flat_map(|t| t.members.iter())
        .chain(dms.iter().flat_map(|d| d.members.iter()));
    for user in people {
        by_id
            .entry(user.id.clone())
            .or_insert_with(|| user.clone());
    }
    by_id.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds;

    fn member(name: &str, role: &str) -> Member {
        Member {
            name: name.into(),
            avatar: format!("https://picsum.photos/seed/{}/32/32", name.to_lowercase()),
            role: role.into(),
            user_id: None,
        }
    }

    #[test]
    fn projection_is_one_to_one() {
        let squad = &seeds::squads()[0];
        let projected = project_members(squad);
        assert_eq!(projected, squad.members);
    }

    #[test]
    fn live_members_follow_the_squad() {
        let mut squads = seeds::squads();
        let space = seeds::spaces()[0].clone();
        squads[0].members.truncate(2);
        let live = live_space_members(&space, &squads);
        let names: Vec<_> = live.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Alex", "Sam"]);
    }

    #[test]
    fn live_members_fall_back_to_snapshot_when_squad_is_gone() {
        let space = seeds::spaces()[0].clone();
        let live = live_space_members(&space, &[]);
        assert_eq!(live, space.members);
    }

    #[test]
    fn member_resolution_prefers_user_id_over_name() {
        let users = seeds::users();
        let mut m = member("Alex", "");
        m.user_id = Some("u8".into());
        assert_eq!(resolve_member_user(&m, &users).name, "Sam");
    }

    #[test]
    fn member_resolution_falls_back_to_name_then_placeholder() {
        let users = seeds::users();
        assert_eq!(resolve_member_user(&member("Jordan", ""), &users).id, "u9");

        let placeholder = resolve_member_user(&member("Emma", "Growth Lead"), &users);
        assert_eq!(placeholder.id, "u-emma");
        assert_eq!(
            placeholder.profile,
            UserProfile::Directory { role: "Member".into() }
        );
    }

    #[test]
    fn synthesized_team_has_general_channel_with_welcome() {
        let space = seeds::spaces()[2].clone();
        let team = synthesize_chat_team(&space, &seeds::users());
        assert_eq!(team.id, "api-integration");
        assert_eq!(team.kind, TeamKind::Project);
        assert_eq!(team.owner, "u1");
        assert_eq!(team.icon, "https://picsum.photos/seed/api-integration/40/40");
        assert_eq!(team.channels.len(), 1);
        let channel = &team.channels[0];
        assert_eq!(channel.id, "c-api-integration-general");
        assert_eq!(channel.name, "General");
        assert_eq!(channel.messages[0].id, "m-api-integration-1");
        assert_eq!(channel.messages[0].text, "Welcome to the API Integration space!");
        assert_eq!(team.members.len(), 2);
    }

    #[test]
    fn unique_members_last_write_wins_first_position_kept() {
        let spaces = vec![member("Alex", "Lead"), member("Sam", "")];
        let squads = vec![member("Jordan", "FE"), member("Alex", "Architect")];
        let merged = unique_members([spaces.as_slice(), squads.as_slice()]);
        let names: Vec<_> = merged.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Alex", "Sam", "Jordan"]);
        assert_eq!(merged[0].role, "Architect");
    }

    #[test]
    fn chat_members_are_deduplicated_by_id() {
        let users = seeds::users();
        let teams = seeds::chat_teams(&users);
        let dms = seeds::direct_messages(&users);
        let all = all_chat_members(&teams, &dms);
        let ids: Vec<_> = all.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["u2", "u4", "u6", "u3", "u5", "u1"]);
    }
}
