//! Generic table view over a [`ListController`]. Knows nothing about any
//! specific resource: columns, actions and the row key all arrive as
//! configuration.

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::icons::icon;
use crate::shared::list_controller::{ColumnDef, ListController, RowAction};
use leptos::prelude::*;

#[component]
pub fn DataTable<R>(
    controller: ListController<R>,
    columns: Vec<ColumnDef<R>>,
    /// Per-row icon actions; rendered in a trailing cell.
    #[prop(optional)]
    row_actions: Vec<RowAction<R>>,
    /// Multi-row checkbox selection.
    #[prop(optional)]
    row_selection: bool,
    /// Bottom pagination bar. Pages with a filter panel render the
    /// controls in the panel header instead and turn this off.
    #[prop(default = true)]
    pagination: bool,
    /// Clicking anywhere on a row (outside the checkbox/actions).
    #[prop(optional, into)]
    on_row_click: Option<Callback<R>>,
) -> impl IntoView
where
    R: Clone + Send + Sync + 'static,
{
    let cols = StoredValue::new(columns);
    let actions = StoredValue::new(row_actions);
    let has_actions = actions.with_value(|a| !a.is_empty());

    let header_cells = move || {
        cols.with_value(|cols| {
            cols.iter()
                .filter(|c| controller.is_column_visible(c.key))
                .map(|c| {
                    let style = c.width.map(|w| format!("width: {};", w));
                    view! {
                        <th class="table__header-cell" style=style>{c.label}</th>
                    }
                })
                .collect_view()
        })
    };

    let body_rows = move || {
        let rows = controller.rows.get();
        if rows.is_empty() {
            let visible = cols.with_value(|cols| {
                cols.iter()
                    .filter(|c| controller.is_column_visible(c.key))
                    .count()
            });
            let span = empty_row_span(visible, row_selection, has_actions);
            return view! {
                <tr class="table__row">
                    <td class="table__cell table__cell--empty" colspan=span>
                        {move || if controller.busy.get() { "Loading..." } else { "No records" }}
                    </td>
                </tr>
            }
            .into_any();
        }

        rows.into_iter()
            .map(|row| {
                let key = controller.row_key(&row);
                let key_for_checkbox = key.clone();
                let key_for_toggle = key.clone();
                let is_selected = move || controller.selected.get().contains(&key);

                let cells = cols.with_value(|cols| {
                    cols.iter()
                        .filter(|c| controller.is_column_visible(c.key))
                        .map(|c| {
                            let text = (c.render)(&row);
                            view! { <td class="table__cell">{text}</td> }
                        })
                        .collect_view()
                });

                let action_cells = actions.with_value(|actions| {
                    actions
                        .iter()
                        .map(|action| {
                            let on_click = action.on_click.clone();
                            let row_for_action = row.clone();
                            view! {
                                <td class="table__cell table__cell--action">
                                    <button
                                        class="button button--icon"
                                        title=action.title
                                        on:click=move |e| {
                                            e.stop_propagation();
                                            on_click(row_for_action.clone());
                                        }
                                    >
                                        {icon(action.icon)}
                                    </button>
                                </td>
                            }
                        })
                        .collect_view()
                });

                let row_for_click = row.clone();
                view! {
                    <tr
                        class="table__row"
                        class:table__row--selected=is_selected
                        on:click=move |_| {
                            if let Some(cb) = on_row_click {
                                cb.run(row_for_click.clone());
                            }
                        }
                    >
                        {row_selection.then(|| view! {
                            <TableCheckbox
                                checked=Signal::derive(move || {
                                    controller.selected.get().contains(&key_for_checkbox)
                                })
                                on_change=Callback::new(move |checked| {
                                    controller.toggle_selected(key_for_toggle.clone(), checked)
                                })
                            />
                        })}
                        {cells}
                        {action_cells}
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        {row_selection.then(|| view! {
                            <th class="table__header-cell table__header-cell--checkbox">
                                <input
                                    type="checkbox"
                                    class="table__checkbox"
                                    on:change=move |ev| {
                                        controller.select_all_on_page(event_target_checked(&ev));
                                    }
                                />
                            </th>
                        })}
                        {header_cells}
                        {has_actions.then(|| view! {
                            <th class="table__header-cell table__header-cell--actions"></th>
                        })}
                    </tr>
                </thead>
                <tbody>
                    {body_rows}
                </tbody>
            </table>
            {pagination.then(|| view! {
                <div class="table__footer">
                    <PaginationControls
                        current_page=controller.current_page
                        total_pages=controller.total_pages
                        total_records=controller.total_records
                        page_size=controller.page_size
                        on_page_change=Callback::new(move |page| controller.load_page(page))
                        on_page_size_change=Callback::new(move |size| controller.set_page_size(size))
                    />
                </div>
            })}
        </div>
    }
}

/// The empty-state cell spans exactly the cells a data row would render:
/// visible columns plus the checkbox and actions cells when present.
fn empty_row_span(visible_columns: usize, row_selection: bool, has_actions: bool) -> usize {
    (visible_columns + row_selection as usize + has_actions as usize).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_row_spans_only_rendered_cells() {
        assert_eq!(empty_row_span(5, false, false), 5);
        assert_eq!(empty_row_span(5, true, true), 7);
        // Hidden columns do not count; only the visible ones do.
        assert_eq!(empty_row_span(2, true, false), 3);
    }

    #[test]
    fn empty_row_span_never_collapses_to_zero() {
        assert_eq!(empty_row_span(0, false, false), 1);
    }
}
