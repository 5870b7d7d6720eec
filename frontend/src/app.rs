use std::rc::Rc;

use yew::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::pages::expenses::ExpensesPage;
use crate::pages::login::LoginPage;
use crate::pages::materials::MaterialsPage;
use crate::pages::products::ProductsPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::pages::sales::SalesPage;
use crate::services::api::ApiClient;
use crate::services::config::AppConfig;
use crate::services::session::{Session, SessionEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    ResetPassword,
    Products,
    Materials,
    Expenses,
    Sales,
    Profile,
}

impl Page {
    /// Sidebar order
    pub const NAVIGATION: [Page; 5] = [
        Page::Products,
        Page::Materials,
        Page::Expenses,
        Page::Sales,
        Page::Profile,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Login",
            Page::Register => "Register",
            Page::ResetPassword => "Reset Password",
            Page::Products => "Products",
            Page::Materials => "Materials",
            Page::Expenses => "Expenses",
            Page::Sales => "Sales",
            Page::Profile => "Profile",
        }
    }

    pub fn requires_session(&self) -> bool {
        !matches!(self, Page::Login | Page::Register | Page::ResetPassword)
    }

    /// Where to go once the session changes under `current`
    pub fn after(event: SessionEvent, current: Page) -> Page {
        match event {
            SessionEvent::Started => Page::Products,
            SessionEvent::Ended | SessionEvent::Expired => Page::Login,
            SessionEvent::ProfileUpdated => current,
        }
    }

    pub fn landing(authenticated: bool) -> Page {
        if authenticated {
            Page::Products
        } else {
            Page::Login
        }
    }

    /// Page actually shown for a request to open `self`
    pub fn resolve(self, authenticated: bool) -> Page {
        match (self.requires_session(), authenticated) {
            (true, false) => Page::Login,
            (false, true) => Page::Products,
            _ => self,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ShellState {
    page: Page,
    /// Bumped on profile changes so the sidebar picks up the new image
    profile_revision: u32,
}

enum ShellAction {
    Navigate(Page),
    Session(SessionEvent),
}

impl Reducible for ShellState {
    type Action = ShellAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            ShellAction::Navigate(page) => {
                if page == self.page {
                    return self;
                }
                log::debug!("navigating to {:?}", page);
                ShellState { page, ..(*self).clone() }
            }
            ShellAction::Session(event) => ShellState {
                page: Page::after(event, self.page),
                profile_revision: match event {
                    SessionEvent::ProfileUpdated => self.profile_revision.wrapping_add(1),
                    _ => self.profile_revision,
                },
            },
        };
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let session = use_memo((), |_| Session::browser());
    let api_client = {
        let session = (*session).clone();
        use_memo(props.config.clone(), move |config| ApiClient::new(config, session))
    };
    let shell = {
        let authenticated = session.is_authenticated();
        use_reducer(move || ShellState {
            page: Page::landing(authenticated),
            profile_revision: 0,
        })
    };

    {
        let session = session.clone();
        let dispatcher = shell.dispatcher();
        use_effect_with((), move |_| {
            session.subscribe(Callback::from(move |event: SessionEvent| {
                log::info!("session event: {:?}", event);
                dispatcher.dispatch(ShellAction::Session(event));
            }));
        });
    }

    let on_navigate = {
        let dispatcher = shell.dispatcher();
        Callback::from(move |page: Page| dispatcher.dispatch(ShellAction::Navigate(page)))
    };

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: ()| session.end())
    };

    let authenticated = session.is_authenticated();
    let page = shell.page.resolve(authenticated);
    let api_client = (*api_client).clone();

    let content = match page {
        Page::Login => html! { <LoginPage {api_client} on_navigate={on_navigate.clone()} /> },
        Page::Register => html! { <RegisterPage {api_client} on_navigate={on_navigate.clone()} /> },
        Page::ResetPassword => html! { <ResetPasswordPage {api_client} on_navigate={on_navigate.clone()} /> },
        Page::Products => html! { <ProductsPage {api_client} /> },
        Page::Materials => html! { <MaterialsPage {api_client} /> },
        Page::Expenses => html! { <ExpensesPage {api_client} /> },
        Page::Sales => html! { <SalesPage {api_client} /> },
        Page::Profile => html! { <ProfilePage session={(*session).clone()} /> },
    };

    if !authenticated {
        return html! { <div class="app auth-layout">{content}</div> };
    }

    html! {
        <div class="app">
            <Sidebar
                current={page}
                {on_navigate}
                {on_logout}
                profile_image={session.profile_image()}
            />
            <main class="app-content" key={format!("{:?}", page)}>
                {content}
            </main>
        </div>
    }
}
