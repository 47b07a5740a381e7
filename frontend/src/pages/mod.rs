pub mod product_list_page;
