//! Footer Component
//!
//! Sitemap of tool groups, balanced over the footer columns, plus the
//! copyright line.

use leptos::prelude::*;

use fileforge_core::data::{self, FOOTER_COLUMNS};
use fileforge_core::{pack_columns, FooterGroup};

use crate::dom;

#[component]
pub fn Footer() -> impl IntoView {
    let layout = pack_columns(data::footer_groups(), FOOTER_COLUMNS);
    log::debug!("[Footer] Column heights {:?}", layout.totals());

    let columns = layout
        .columns
        .into_iter()
        .map(|column| {
            view! {
                <div class="flex flex-col space-y-8">
                    {column.groups.into_iter().map(|group| view! { <FooterGroupList group=group /> }).collect_view()}
                </div>
            }
        })
        .collect_view();

    view! {
        <footer class="bg-white py-16">
            <div class="container mx-auto px-4">
                <div class="grid grid-cols-1 md:grid-cols-3 lg:grid-cols-6 gap-8">
                    {columns}
                </div>

                <div class="mt-16 pt-8 border-t border-gray-200">
                    <div class="flex flex-col md:flex-row justify-between items-center">
                        <p class="text-gray-500 text-sm">
                            {format!("© {} FileForge. All rights reserved.", dom::current_year())}
                        </p>
                        <div class="mt-4 md:mt-0 flex gap-6">
                            <a href="#" class="text-gray-500 hover:text-orange-500 text-sm">"Privacy Policy"</a>
                            <a href="#" class="text-gray-500 hover:text-orange-500 text-sm">"Terms of Service"</a>
                            <a href="#" class="text-gray-500 hover:text-orange-500 text-sm">"Contact"</a>
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterGroupList(group: &'static FooterGroup) -> impl IntoView {
    view! {
        <div class="flex flex-col">
            <h3 class="font-semibold text-gray-700 mb-4">{group.title.as_str()}</h3>
            <ul class="space-y-3">
                {group.links.iter().map(|link| view! {
                    <li>
                        <a href="#" class="text-sm hover:text-orange-500">{link.as_str()}</a>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
