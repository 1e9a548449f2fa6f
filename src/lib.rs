pub mod util;

pub mod board;
pub mod components;
pub mod config;
pub mod document;
pub mod geom;
pub mod input;
pub mod overlay;
mod pages;
pub mod player;
pub mod recorder;
pub mod surface;


use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light"/>

		<Title formatter=|page| format!("Replayboard - {page}")/>

		// Inject metadata in the <head> tag.
		<Meta charset="UTF-8"/>
		<Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

		<Router>
			<Routes fallback=pages::NotFound>
				// TODO: Serve under a base path when deployed to Github pages; trunk serves from the root.
				<Route path=path!("/") view=pages::Home/>
			</Routes>
		</Router>
	}
}
