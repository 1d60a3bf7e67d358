use crate::domain::a001_country::ui::details::CountryDetails;
use crate::domain::a001_country::ui::list::CountryList;
use crate::domain::a002_region::ui::details::RegionDetails;
use crate::domain::a002_region::ui::list::RegionList;
use crate::domain::a003_winery::ui::details::WineryDetails;
use crate::domain::a003_winery::ui::list::WineryList;
use crate::domain::a004_wine::ui::details::WineDetails;
use crate::domain::a004_wine::ui::list::WineList;
use crate::domain::a005_grape::ui::details::GrapeDetails;
use crate::domain::a005_grape::ui::list::GrapeList;
use crate::layout::Shell;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Portuguese paths, one list and one detail route per section
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/vinhos") view=WineList />
                    <Route path=path!("/vinhos/:slug") view=WineDetails />
                    <Route path=path!("/vinicolas") view=WineryList />
                    <Route path=path!("/vinicolas/:slug") view=WineryDetails />
                    <Route path=path!("/regioes") view=RegionList />
                    <Route path=path!("/regioes/:slug") view=RegionDetails />
                    <Route path=path!("/paises") view=CountryList />
                    <Route path=path!("/paises/:slug") view=CountryDetails />
                    <Route path=path!("/uvas") view=GrapeList />
                    <Route path=path!("/uvas/:slug") view=GrapeDetails />
                </Routes>
            </Shell>
        </Router>
    }
}
