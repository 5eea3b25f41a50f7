mod host;
mod resolvers;
