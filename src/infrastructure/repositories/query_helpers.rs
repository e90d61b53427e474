// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::common::ListQuery;
use sea_orm::{ColumnTrait, EntityTrait, Order, QueryOrder, QuerySelect, Select};
use std::str::FromStr;

/// 把列表查询的排序和分页参数应用到查询上
///
/// 未知的排序列回退到默认排序。主键总是作为次要排序列，保证翻页稳定。
pub(crate) fn apply_list_query<E>(
    select: Select<E>,
    query: &ListQuery,
    default: (E::Column, Order),
    primary_key: E::Column,
) -> Select<E>
where
    E: EntityTrait,
    E::Column: FromStr + ColumnTrait,
{
    let (column, order) = query
        .sort
        .as_deref()
        .and_then(|name| E::Column::from_str(name).ok())
        .map(|column| {
            let order = if query.descending {
                Order::Desc
            } else {
                Order::Asc
            };
            (column, order)
        })
        .unwrap_or(default);

    select
        .order_by(column, order)
        .order_by(primary_key, Order::Asc)
        .offset(query.offset())
        .limit(query.per_page)
}
