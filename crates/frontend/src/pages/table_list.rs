use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::PageHeader;
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, PartialEq)]
struct RuleRow {
    id: u32,
    name: &'static str,
    description: &'static str,
    calls: u32,
}

const RULES: [RuleRow; 4] = [
    RuleRow { id: 1, name: "TradeCode 1", description: "Nightly export", calls: 412 },
    RuleRow { id: 2, name: "TradeCode 2", description: "Price sync", calls: 87 },
    RuleRow { id: 3, name: "TradeCode 3", description: "Stock reconciliation", calls: 1290 },
    RuleRow { id: 4, name: "TradeCode 4", description: "Order import", calls: 33 },
];

#[component]
pub fn TableList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="page">
            <PageHeader title="Search Table" />
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Rule"</TableHeaderCell>
                        <TableHeaderCell>"Description"</TableHeaderCell>
                        <TableHeaderCell>"Calls"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {RULES
                        .iter()
                        .map(|row| {
                            let path = format!("/list/{}", row.id);
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <a
                                            href=path.clone()
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                ctx.navigate(&path);
                                            }
                                        >
                                            {row.name}
                                        </a>
                                    </TableCell>
                                    <TableCell>{row.description}</TableCell>
                                    <TableCell>{row.calls}</TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}

#[component]
pub fn ListDetail(id: String) -> impl IntoView {
    let row = id
        .parse::<u32>()
        .ok()
        .and_then(|id| RULES.iter().find(|row| row.id == id).cloned());

    view! {
        <div class="page">
            <PageHeader title=format!("Rule {}", id) />
            {match row {
                Some(row) => view! {
                    <dl class="page__details">
                        <dt>"Name"</dt>
                        <dd>{row.name}</dd>
                        <dt>"Description"</dt>
                        <dd>{row.description}</dd>
                        <dt>"Calls"</dt>
                        <dd>{row.calls}</dd>
                    </dl>
                }
                .into_any(),
                None => view! { <p class="page__text">"No such rule."</p> }.into_any(),
            }}
        </div>
    }
}
