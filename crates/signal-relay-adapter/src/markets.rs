/*
[INPUT]:  Exchange metadata entries
[OUTPUT]: Market lookup by unified symbol and by exchange id
[POS]:    Market metadata cache shared by all requests of one client
[UPDATE]: When market filtering or lookup rules change
*/

use std::collections::HashMap;

use crate::types::{Market, MarketType, SymbolEntry};

#[derive(Debug, Default)]
pub struct MarketCache {
    by_symbol: HashMap<String, Market>,
    symbol_by_id: HashMap<String, String>,
}

impl MarketCache {
    /// Build the cache from exchange metadata, keeping spot pairs and perpetuals
    pub fn from_entries(entries: &[SymbolEntry], market_type: MarketType) -> Self {
        let mut cache = Self::default();
        for entry in entries.iter().filter(|e| e.is_perpetual_or_spot()) {
            let market = Market {
                id: entry.symbol.clone(),
                symbol: Market::unified_symbol(&entry.base_asset, &entry.quote_asset),
                base: entry.base_asset.clone(),
                quote: entry.quote_asset.clone(),
                market_type,
                active: entry.is_trading(),
            };
            cache.insert(market);
        }
        cache
    }

    pub fn insert(&mut self, market: Market) {
        self.symbol_by_id
            .insert(market.id.to_ascii_uppercase(), market.symbol.clone());
        self.by_symbol.insert(market.symbol.clone(), market);
    }

    pub fn get(&self, symbol: &str) -> Option<&Market> {
        self.by_symbol.get(symbol)
    }

    /// Case-insensitive lookup by exchange-native ticker
    pub fn get_by_id(&self, id: &str) -> Option<&Market> {
        self.symbol_by_id
            .get(&id.to_ascii_uppercase())
            .and_then(|symbol| self.by_symbol.get(symbol))
    }

    pub fn markets(&self) -> Vec<Market> {
        let mut markets: Vec<Market> = self.by_symbol.values().cloned().collect();
        markets.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        markets
    }

    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}
