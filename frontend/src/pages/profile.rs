use yew::prelude::*;

use crate::components::toast::ToastView;
use crate::components::{input_value, textarea_value};
use crate::hooks::use_toast::use_toast;
use crate::services::session::Session;
use crate::state::forms::profile::{load_profile, save_profile, ProfileField, ProfileForm};
use crate::state::toast::Toast;

#[derive(Properties, PartialEq)]
pub struct ProfilePageProps {
    pub session: Session,
}

/// Owner details kept in this browser; nothing here reaches the backend
#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfilePageProps) -> Html {
    let toast = use_toast();
    let form = {
        let session = props.session.clone();
        use_state(move || ProfileForm::new(load_profile(), session.profile_image()))
    };
    let error_message = use_state(|| Option::<String>::None);

    let on_input = |field: ProfileField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.set(field, input_value(&e));
            form.set(next);
        })
    };

    let on_about = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.set(ProfileField::About, textarea_value(&e));
            form.set(next);
        })
    };

    let on_save = {
        let form = form.clone();
        let error_message = error_message.clone();
        let session = props.session.clone();
        let show = toast.show.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok((profile, image_url)) => {
                    save_profile(&profile);
                    session.set_profile_image(image_url.clone());
                    form.set(ProfileForm::new(profile, image_url));
                    error_message.set(None);
                    show.emit(Toast::success("Profile updated successfully"));
                }
                Err(message) => error_message.set(Some(message)),
            }
        })
    };

    let on_logout = {
        let session = props.session.clone();
        Callback::from(move |_: MouseEvent| session.end())
    };

    let preview = form.image_url.trim().to_string();

    html! {
        <div class="page profile-page">
            <ToastView toast={toast.current.clone()} on_dismiss={toast.dismiss.clone()} />
            <div class="page-header">
                <h2>{"Profile"}</h2>
                <button type="button" class="btn btn-secondary" onclick={on_logout}>{"Logout"}</button>
            </div>
            <form class="profile-card" onsubmit={on_save}>
                <div class="profile-avatar">
                    {if preview.is_empty() {
                        html! { <div class="profile-avatar-empty">{"👤"}</div> }
                    } else {
                        html! { <img src={preview} alt="Profile" /> }
                    }}
                </div>
                {if let Some(error) = (*error_message).clone() {
                    html! { <div class="form-error">{error}</div> }
                } else {
                    html! {}
                }}
                <div class="form-group">
                    <label for="profile-image">{"Profile Image URL"}</label>
                    <input id="profile-image" type="url" placeholder="https://..."
                        value={form.image_url.clone()} oninput={on_input(ProfileField::ImageUrl)} />
                </div>
                <div class="form-group">
                    <label for="profile-name">{"Name"}</label>
                    <input id="profile-name" type="text"
                        value={form.profile.name.clone()} oninput={on_input(ProfileField::Name)} />
                </div>
                <div class="form-group">
                    <label for="profile-email">{"Email"}</label>
                    <input id="profile-email" type="email"
                        value={form.profile.email.clone()} oninput={on_input(ProfileField::Email)} />
                </div>
                <div class="form-group">
                    <label for="profile-phone">{"Phone"}</label>
                    <input id="profile-phone" type="tel"
                        value={form.profile.phone.clone()} oninput={on_input(ProfileField::Phone)} />
                </div>
                <div class="form-group">
                    <label for="profile-address">{"Address"}</label>
                    <input id="profile-address" type="text"
                        value={form.profile.address.clone()} oninput={on_input(ProfileField::Address)} />
                </div>
                <div class="form-group">
                    <label for="profile-about">{"About"}</label>
                    <textarea id="profile-about" rows="4" value={form.profile.about.clone()} oninput={on_about} />
                </div>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">{"Save Profile"}</button>
                </div>
            </form>
        </div>
    }
}
