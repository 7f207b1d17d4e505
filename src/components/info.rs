//! Info Footer
//!
//! Static credits below the app.

use leptos::prelude::*;

#[component]
pub fn Info() -> impl IntoView {
    view! {
        <footer class="info">
            <p>"Double-click to edit a todo"</p>
            <p>
                "Created by "
                <a href="http://github.com/nartc/ng-minimal-todomvc">"Chau"</a>
                ", ported to Leptos"
            </p>
            <p>"Part of " <a href="http://todomvc.com">"TodoMVC"</a></p>
        </footer>
    }
}
