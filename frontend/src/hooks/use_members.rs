use std::future::Future;
use std::pin::Pin;

use shared::roster::{member_counts, parse_birth_year, sort_by_birth_name, MemberCounts};
use shared::{ApiError, CreateMemberRequest, LeaveMemberRequest, Member, UpdateMemberRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

type PendingRequest = Pin<Box<dyn Future<Output = Result<(), ApiError>>>>;

fn pending(request: impl Future<Output = Result<(), ApiError>> + 'static) -> PendingRequest {
    Box::pin(request)
}

/// Which member dialog is open
#[derive(Debug, Clone, PartialEq)]
pub enum MemberModal {
    Closed,
    Add,
    Edit(Member),
    Leave(Member),
}

/// Form contents of the add/edit dialog
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemberForm {
    pub name: String,
    pub birth_year: String,
}

impl MemberForm {
    pub fn for_member(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            birth_year: member.birth_date.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<(String, Option<i32>), String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("이름을 입력하세요.".to_string());
        }
        Ok((name.to_string(), parse_birth_year(&self.birth_year)?))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeaveForm {
    pub left_date: String,
    pub left_reason: String,
}

#[derive(Clone, PartialEq)]
pub struct MembersState {
    pub members: Vec<Member>,
    pub counts: MemberCounts,
    pub hide_left: bool,
    pub sort_ascending: bool,
    pub modal: MemberModal,
    pub error: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct UseMembersActions {
    pub set_hide_left: Callback<bool>,
    pub toggle_sort: Callback<()>,
    pub open_modal: Callback<MemberModal>,
    pub add: Callback<MemberForm>,
    pub edit: Callback<(Member, MemberForm)>,
    pub leave: Callback<(Member, LeaveForm)>,
    pub return_member: Callback<Member>,
    pub delete: Callback<Member>,
}

pub struct UseMembersResult {
    pub state: MembersState,
    pub actions: UseMembersActions,
}

#[hook]
pub fn use_members(api_client: &ApiClient) -> UseMembersResult {
    let members = use_state(Vec::<Member>::new);
    let hide_left = use_state(|| true);
    let sort_ascending = use_state(|| true);
    let modal = use_state(|| MemberModal::Closed);
    let error = use_state(|| None::<String>);

    let reload = {
        let api_client = api_client.clone();
        let members = members.clone();
        let error = error.clone();
        use_callback(*hide_left, move |_: (), hide_left| {
            let api_client = api_client.clone();
            let members = members.clone();
            let error = error.clone();
            let include_left = !*hide_left;
            spawn_local(async move {
                match api_client.get_members(include_left).await {
                    Ok(list) => {
                        members.set(list);
                        error.set(None);
                    }
                    Err(e) => {
                        Logger::error_with_component("members", &format!("member list failed: {}", e));
                        error.set(Some(e.user_message()));
                    }
                }
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with(*hide_left, move |_| {
            reload.emit(());
            || ()
        });
    }

    // Runs a mutation, then closes the dialog and reloads on success
    let mutate = {
        let modal = modal.clone();
        let error = error.clone();
        let reload = reload.clone();
        use_callback(
            (),
            move |(label, request): (String, PendingRequest), _| {
                let modal = modal.clone();
                let error = error.clone();
                let reload = reload.clone();
                spawn_local(async move {
                    match request.await {
                        Ok(()) => {
                            Logger::info_with_component("members", &label);
                            modal.set(MemberModal::Closed);
                            error.set(None);
                            reload.emit(());
                        }
                        Err(e) => {
                            Logger::warn_with_component("members", &format!("{} failed: {}", label, e));
                            error.set(Some(e.user_message()));
                        }
                    }
                });
            },
        )
    };

    let add = {
        let api_client = api_client.clone();
        let mutate = mutate.clone();
        let error = error.clone();
        use_callback((), move |form: MemberForm, _| {
            let (name, birth_year) = match form.validate() {
                Ok(valid) => valid,
                Err(message) => return error.set(Some(message)),
            };
            let api_client = api_client.clone();
            let label = format!("added {}", name);
            let request = CreateMemberRequest { name, birth_year };
            mutate.emit((
                label,
                pending(async move { api_client.create_member(&request).await.map(|_| ()) }),
            ));
        })
    };

    let edit = {
        let api_client = api_client.clone();
        let mutate = mutate.clone();
        let error = error.clone();
        use_callback((), move |(member, form): (Member, MemberForm), _| {
            let (name, birth_year) = match form.validate() {
                Ok(valid) => valid,
                Err(message) => return error.set(Some(message)),
            };
            let api_client = api_client.clone();
            let request = UpdateMemberRequest {
                name: Some(name),
                birth_year,
            };
            mutate.emit((
                format!("updated member {}", member.id),
                pending(async move { api_client.update_member(member.id, &request).await.map(|_| ()) }),
            ));
        })
    };

    let leave = {
        let api_client = api_client.clone();
        let mutate = mutate.clone();
        let error = error.clone();
        use_callback((), move |(member, form): (Member, LeaveForm), _| {
            if form.left_date.trim().is_empty() || form.left_reason.trim().is_empty() {
                return error.set(Some("탈퇴일과 사유를 입력하세요.".to_string()));
            }
            let api_client = api_client.clone();
            let request = LeaveMemberRequest {
                left_date: form.left_date.trim().to_string(),
                left_reason: form.left_reason.trim().to_string(),
            };
            mutate.emit((
                format!("{} left", member.name),
                pending(async move { api_client.leave_member(member.id, &request).await.map(|_| ()) }),
            ));
        })
    };

    let return_member = {
        let api_client = api_client.clone();
        let mutate = mutate.clone();
        use_callback((), move |member: Member, _| {
            if !gloo::dialogs::confirm(&format!("{} 멤버를 복귀 처리하시겠습니까?", member.name)) {
                return;
            }
            let api_client = api_client.clone();
            mutate.emit((
                format!("{} returned", member.name),
                pending(async move { api_client.return_member(member.id).await.map(|_| ()) }),
            ));
        })
    };

    let delete = {
        let api_client = api_client.clone();
        let mutate = mutate.clone();
        use_callback((), move |member: Member, _| {
            let question = format!(
                "{} 멤버를 완전히 삭제하시겠습니까? 이 작업은 되돌릴 수 없습니다.",
                member.name
            );
            if !gloo::dialogs::confirm(&question) {
                return;
            }
            let api_client = api_client.clone();
            mutate.emit((
                format!("deleted {}", member.name),
                pending(async move { api_client.delete_member(member.id).await.map(|_| ()) }),
            ));
        })
    };

    let set_hide_left = {
        let hide_left = hide_left.clone();
        use_callback((), move |value: bool, _| hide_left.set(value))
    };

    let toggle_sort = {
        let sort_ascending = sort_ascending.clone();
        use_callback(*sort_ascending, move |_: (), ascending| sort_ascending.set(!*ascending))
    };

    let open_modal = {
        let modal = modal.clone();
        let error = error.clone();
        use_callback((), move |next: MemberModal, _| {
            error.set(None);
            modal.set(next);
        })
    };

    UseMembersResult {
        state: MembersState {
            members: sort_by_birth_name(members.as_slice(), *sort_ascending),
            counts: member_counts(&members),
            hide_left: *hide_left,
            sort_ascending: *sort_ascending,
            modal: (*modal).clone(),
            error: (*error).clone(),
        },
        actions: UseMembersActions {
            set_hide_left,
            toggle_sort,
            open_modal,
            add,
            edit,
            leave,
            return_member,
            delete,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_member_form_validation() {
        let form = MemberForm {
            name: "  장영범 ".to_string(),
            birth_year: "1996".to_string(),
        };
        assert_eq!(form.validate(), Ok(("장영범".to_string(), Some(1996))));

        let blank = MemberForm::default();
        assert!(blank.validate().is_err());

        let bad_year = MemberForm {
            name: "김용진".to_string(),
            birth_year: "96".to_string(),
        };
        assert!(bad_year.validate().is_err());
    }

    #[wasm_bindgen_test]
    fn test_form_prefill_from_member() {
        let member = Member {
            id: 3,
            name: "김용진".to_string(),
            birth_date: Some("1994".to_string()),
            is_active: true,
            left_date: None,
            left_reason: None,
            created_at: None,
        };
        assert_eq!(
            MemberForm::for_member(&member),
            MemberForm {
                name: "김용진".to_string(),
                birth_year: "1994".to_string(),
            }
        );
    }
}
