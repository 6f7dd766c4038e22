//! HTTP client and orval code generation setup.

/// Axios instance with bearer-token injection; `customInstance` is the orval mutator
pub const API_CLIENT: &str = r#"import { getCookie } from "@/utils/setCookie";
import Axios, { AxiosRequestConfig } from "axios";

const api = Axios.create({
  baseURL: process.env.NEXT_PUBLIC_API_URL,
});

api.interceptors.request.use(async (config) => {
  const token = await getCookie();

  if (token) {
    config.headers.Authorization = `Bearer ${token.value}`;
  }

  return config;
});

export const customInstance = <T>(config: AxiosRequestConfig): Promise<T> => {
  const source = Axios.CancelToken.source();
  const promise = api({ ...config, cancelToken: source.token }).then(
    ({ data }) => data
  );

  // eslint-disable-next-line @typescript-eslint/ban-ts-comment
  // @ts-ignore
  promise.cancel = () => {
    source.cancel("Query was cancelled by React Query");
  };

  return promise;
};

export default api;
"#;

pub const ENV_FILE: &str = "NEXT_PUBLIC_API_URL=' '";

pub const ORVAL_CONFIG: &str = r#"import { defineConfig } from 'orval'

export default defineConfig({
    api: {
        input: './swagger.json',
        output: {
            target: './src/api/generate',
            mode: 'tags-split',
            httpClient: 'axios',
            client: 'react-query',
            clean: true,
            baseUrl: process.env.NEXT_PUBLIC_API_URL,
            override: {
                mutator: {
                    path: './src/api/api.ts',
                    name: 'customInstance',
                },
            },
        }
    },
    apiwithzod: {
        input: './swagger.json',
        output: {
            target: './src/api/generate',
            mode: 'tags-split',
            client: 'zod',
            fileExtension: '.zod.ts',
        }
    }
})
"#;
