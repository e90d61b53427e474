// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::TableSettings;
use crate::domain::repositories::common::ListQuery;
use serde::Deserialize;

/// 表格列表的查询参数
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TableQueryDto {
    pub sort: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl TableQueryDto {
    /// 转换为仓库查询
    ///
    /// # 参数
    ///
    /// * `sortable` - 允许排序的列名
    /// * `default_sort` - 默认排序，`-` 前缀表示降序
    /// * `settings` - 分页配置
    pub fn to_list_query(
        &self,
        sortable: &[&str],
        default_sort: &str,
        settings: &TableSettings,
    ) -> ListQuery {
        let sort = self
            .sort
            .as_deref()
            .filter(|sort| sortable.contains(&sort.trim_start_matches('-')))
            .unwrap_or(default_sort);

        ListQuery {
            per_page: self
                .per_page
                .unwrap_or(settings.per_page)
                .clamp(1, settings.max_per_page.max(1)),
            ..Default::default()
        }
        .with_page(self.page)
        .with_sort(sort)
    }
}
